//! Configuration module for docker-deploy
//!
//! Deploy settings come from two places:
//! 1. CLI flags (highest priority)
//! 2. `.docker-deploy.yml`, the nearest one at or above the working directory
//!
//! Anything unset in both falls back to built-in defaults.

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME};
pub use types::{AppConfig, LoadedConfig};
