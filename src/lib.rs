//! docker-deploy - `docker stack deploy` with versioned configs and secrets
//!
//! Swarm configs and secrets are immutable, so a changed file needs a new
//! resource name. docker-deploy reads the compose files, derives one
//! environment variable per named config or secret (`nginx.conf` becomes
//! `NGINX_CONF`) whose value is a short hash of the file content, and runs
//! the orchestrator with those variables set. A compose file can then say
//! `name: nginx.${NGINX_CONF}`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    synthesize, DeployOptions, DeployUseCase, DocumentSource, EnvironmentAggregator, Synthesis,
};
pub use config::AppConfig;
pub use domain::entities::{ComposeDocument, ReferencedFile};
pub use domain::value_objects::{EnvironmentAssignment, EnvironmentSet, Fingerprint, VariableName};
pub use error::{DeployError, DeployResult};
