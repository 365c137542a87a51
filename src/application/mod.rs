//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Does NOT contain parsing or naming rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `synthesize` - Derive the environment for one compose document
//! - `EnvironmentAggregator` - Read and synthesize an ordered list of sources
//! - `DeployUseCase` - Environment plus `docker stack deploy` arguments

pub mod aggregate;
pub mod deploy;
pub mod synthesize;

pub use aggregate::{DocumentSource, EnvironmentAggregator, StdinCapture, STDIN_MARKER};
pub use deploy::{
    resolve_host, DeployOptions, DeployUseCase, PreparedDeploy, DEFAULT_COMPOSE_FILE,
};
pub use synthesize::{assignment_for, synthesize, Synthesis};
