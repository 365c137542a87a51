//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DeployResult;

use super::loader::{self, ConfigWarning};

/// Settings read from `.docker-deploy.yml`
///
/// ```yaml
/// host: ssh://deploy@swarm-manager
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Daemon socket used when `--host` is not given
    #[serde(default)]
    pub host: Option<String>,
}

impl AppConfig {
    /// Load one config file, ignoring warnings
    pub fn load(path: &Path) -> DeployResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load one config file and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DeployResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Find the nearest config file at or above `start` and load it
    pub fn discover(start: &Path) -> DeployResult<LoadedConfig> {
        loader::discover(start)
    }

    /// Configured host, treating an empty string as unset
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref().filter(|h| !h.is_empty())
    }
}

/// Result of config discovery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// The file it was read from; `None` when no file was found
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}
