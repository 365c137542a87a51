//! Configuration discovery and loading

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{DeployError, DeployResult};

use super::types::{AppConfig, LoadedConfig};

/// File name searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".docker-deploy.yml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(AppConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| DeployError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> DeployResult<(AppConfig, Vec<ConfigWarning>)> {
    if content.trim().is_empty() {
        return Ok((AppConfig::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let config: AppConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string().split_whitespace().collect::<Vec<_>>().join(" "),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    Ok((config, warnings))
}

/// Walk from `start` up to the filesystem root and load the first
/// `.docker-deploy.yml` found.
///
/// Not finding one anywhere yields the default config. A file that exists
/// but cannot be read or parsed is an error.
pub fn discover(start: &Path) -> DeployResult<LoadedConfig> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        let content = match fs::read_to_string(&candidate) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(DeployError::ConfigRead {
                    path: candidate,
                    source,
                })
            }
        };

        info!("Reading config file: {}", candidate.display());
        let (config, warnings) = parse(&content, &candidate)?;
        for warning in &warnings {
            warn!("{}", warning);
        }

        return Ok(LoadedConfig {
            config,
            path: Some(candidate),
            warnings,
        });
    }

    debug!(
        "No {} found at or above {}",
        CONFIG_FILE_NAME,
        start.display()
    );
    Ok(LoadedConfig::default())
}
