//! Error types for docker-deploy
//!
//! Uses `thiserror` for library errors. Every variant here is fatal: it aborts
//! the run before the orchestrator is started. Soft, per-entry problems are
//! reported as [`SynthesisWarning`](crate::domain::value_objects::SynthesisWarning)
//! values instead.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docker-deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for docker-deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// A compose document could not be read from disk
    #[error("cannot read compose file {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard input could not be drained
    #[error("cannot read compose file from stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    /// A compose document is not well-formed YAML
    #[error("invalid compose file {source_name}: {message}")]
    ComposeParse {
        source_name: String,
        message: String,
    },

    /// The discovered app config exists but cannot be read
    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The discovered app config is not well-formed YAML
    #[error("invalid config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// The working directory is needed but unavailable
    #[error("cannot read the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    /// No stack name was given and none can be derived from the working directory
    #[error("no stack name provided and {0} has no directory name to use instead")]
    NoStackName(PathBuf),

    /// The orchestrator binary could not be started
    #[error("cannot run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Captured stdin could not be staged for the orchestrator
    #[error("cannot replay stdin to the orchestrator: {0}")]
    ReplayBuffer(#[source] std::io::Error),
}
