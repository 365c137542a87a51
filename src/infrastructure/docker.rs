//! Docker CLI invocation
//!
//! Assembles the `docker stack deploy` command line and runs it with the
//! synthesized environment. Stdout and stderr always pass through; stdin
//! either passes through or is replaced by the bytes captured while reading
//! a compose document from stdin.

use std::ffi::OsString;
use std::io::{Seek, SeekFrom, Write};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, info};

use crate::domain::value_objects::EnvironmentSet;
use crate::error::{DeployError, DeployResult};

/// Orchestrator binary
pub const DOCKER_PROGRAM: &str = "docker";

/// Arguments of one `docker stack deploy` run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackDeploy {
    /// Daemon socket, passed as a global `--host` option
    pub host: Option<String>,
    /// Compose file arguments in order (`-` for stdin)
    pub compose_files: Vec<String>,
    pub with_registry_auth: bool,
    pub prune: bool,
    /// Stack name and any extra arguments, passed verbatim
    pub stack_args: Vec<String>,
}

impl StackDeploy {
    /// Full argument vector, excluding the program name
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(host) = &self.host {
            args.push("--host".to_string());
            args.push(host.clone());
        }

        args.push("stack".to_string());
        args.push("deploy".to_string());

        for compose_file in &self.compose_files {
            args.push("--compose-file".to_string());
            args.push(compose_file.clone());
        }

        if self.with_registry_auth {
            args.push("--with-registry-auth".to_string());
        }

        if self.prune {
            args.push("--prune".to_string());
        }

        args.extend(self.stack_args.iter().cloned());
        args
    }

    /// Human-readable command line, for logs
    pub fn command_line(&self) -> String {
        format!("{} {}", DOCKER_PROGRAM, self.args().join(" "))
    }
}

/// Runs the docker CLI
#[derive(Debug, Clone)]
pub struct DockerCli {
    program: OsString,
}

impl Default for DockerCli {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerCli {
    /// Resolve `docker` through `PATH`
    pub fn new() -> Self {
        Self::with_program(DOCKER_PROGRAM)
    }

    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the command without running it.
    ///
    /// The synthesized assignments are added on top of the inherited
    /// environment, later assignments overriding earlier ones.
    pub fn command(&self, deploy: &StackDeploy, environment: &EnvironmentSet) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(deploy.args())
            .envs(environment.pairs())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Run the deploy and wait for it to finish.
    ///
    /// `stdin_replay` is fed to the child as its stdin when non-empty;
    /// otherwise the child inherits this process's stdin.
    pub fn run(
        &self,
        deploy: &StackDeploy,
        environment: &EnvironmentSet,
        stdin_replay: Option<&[u8]>,
    ) -> DeployResult<ExitStatus> {
        let mut cmd = self.command(deploy, environment);

        match stdin_replay.filter(|bytes| !bytes.is_empty()) {
            Some(bytes) => {
                debug!("Replaying {} bytes of stdin", bytes.len());
                cmd.stdin(spool(bytes)?);
            }
            None => {
                cmd.stdin(Stdio::inherit());
            }
        }

        info!("Running: {}", deploy.command_line());

        cmd.status().map_err(|source| DeployError::Spawn {
            program: self.program.to_string_lossy().to_string(),
            source,
        })
    }
}

/// Stage bytes in an anonymous temporary file positioned at the start
fn spool(bytes: &[u8]) -> DeployResult<Stdio> {
    let mut file = tempfile::tempfile().map_err(DeployError::ReplayBuffer)?;
    file.write_all(bytes).map_err(DeployError::ReplayBuffer)?;
    file.seek(SeekFrom::Start(0))
        .map_err(DeployError::ReplayBuffer)?;
    Ok(Stdio::from(file))
}
