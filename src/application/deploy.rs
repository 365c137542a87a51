//! Deploy Use Case
//!
//! Prepares one `docker stack deploy` run:
//! 1. Synthesize the environment from every compose source
//! 2. Resolve the daemon host (flag, then config file)
//! 3. Assemble the stack deploy arguments
//!
//! Nothing here spawns a process. Any error returned means the
//! orchestrator must not be started.

use std::io::Read;
use std::path::Path;

use crate::config::AppConfig;
use crate::domain::ports::FileSystem;
use crate::error::{DeployError, DeployResult};
use crate::infrastructure::docker::StackDeploy;

use super::aggregate::{DocumentSource, EnvironmentAggregator, StdinCapture};
use super::synthesize::Synthesis;

/// Options for a deploy, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Compose documents in order
    pub compose_files: Vec<DocumentSource>,
    /// Send registry authentication details to Swarm agents
    pub with_registry_auth: bool,
    /// Prune services that are no longer referenced
    pub prune: bool,
    /// Daemon socket; overrides the config file
    pub host: Option<String>,
    /// Stack name and extra arguments; empty means "use the directory name"
    pub stack_args: Vec<String>,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            compose_files: vec![DocumentSource::from(DEFAULT_COMPOSE_FILE)],
            with_registry_auth: false,
            prune: false,
            host: None,
            stack_args: Vec::new(),
        }
    }
}

/// Compose file used when none is given
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// Everything needed to run the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDeploy {
    pub stack: StackDeploy,
    pub synthesis: Synthesis,
    /// Captured stdin, present when a compose source read it
    pub stdin_replay: Option<Vec<u8>>,
}

/// Deploy use case
pub struct DeployUseCase<FS>
where
    FS: FileSystem,
{
    aggregator: EnvironmentAggregator<FS>,
}

impl<FS> DeployUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self {
            aggregator: EnvironmentAggregator::new(file_system),
        }
    }

    /// Build the environment and command line.
    ///
    /// `cwd` supplies the default stack name when no stack arguments were
    /// given.
    pub fn prepare<R: Read>(
        &self,
        options: &DeployOptions,
        config: &AppConfig,
        cwd: &Path,
        stdin: R,
    ) -> DeployResult<PreparedDeploy> {
        let mut stdin = StdinCapture::new(stdin);
        let synthesis = self.aggregator.execute(&options.compose_files, &mut stdin)?;

        let stack = StackDeploy {
            host: resolve_host(options, config),
            compose_files: options
                .compose_files
                .iter()
                .map(|source| source.to_string())
                .collect(),
            with_registry_auth: options.with_registry_auth,
            prune: options.prune,
            stack_args: stack_args(options, cwd)?,
        };

        Ok(PreparedDeploy {
            stack,
            synthesis,
            stdin_replay: stdin.into_replay(),
        })
    }
}

/// `--host` wins over the config file; empty values count as unset
pub fn resolve_host(options: &DeployOptions, config: &AppConfig) -> Option<String> {
    options
        .host
        .as_deref()
        .filter(|h| !h.is_empty())
        .or_else(|| config.host())
        .map(str::to_string)
}

fn stack_args(options: &DeployOptions, cwd: &Path) -> DeployResult<Vec<String>> {
    if !options.stack_args.is_empty() {
        return Ok(options.stack_args.clone());
    }

    cwd.file_name()
        .map(|name| vec![name.to_string_lossy().to_string()])
        .ok_or_else(|| DeployError::NoStackName(cwd.to_path_buf()))
}
