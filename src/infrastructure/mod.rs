//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and process plumbing.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `docker` - `docker stack deploy` invocation

pub mod docker;
pub mod fs;

// Re-export for convenience
pub use docker::{DockerCli, StackDeploy, DOCKER_PROGRAM};
pub use fs::LocalFs;
