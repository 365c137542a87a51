//! docker-deploy CLI
//!
//! Usage: docker-deploy [OPTIONS] [ARGS]...
//!
//! Reads the compose files, exports a content hash for every versioned
//! config and secret file, then runs `docker stack deploy` with those
//! variables in its environment.

mod cli;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use docker_deploy::application::DeployUseCase;
use docker_deploy::config::AppConfig;
use docker_deploy::error::DeployError;
use docker_deploy::infrastructure::{DockerCli, LocalFs, DOCKER_PROGRAM};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}

/// Log to stderr without timestamps; `RUST_LOG` overrides the CLI verbosity
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .without_time()
                .with_target(false),
        )
        .init();
}

/// Prepare and run the deploy, returning the orchestrator's exit code
fn run(cli: &Cli) -> Result<i32> {
    let cwd = std::env::current_dir().map_err(DeployError::CurrentDir)?;
    let loaded = AppConfig::discover(&cwd)?;
    let options = cli.deploy_options();

    let prepared =
        DeployUseCase::new(LocalFs::new()).prepare(&options, &loaded.config, &cwd, io::stdin())?;
    debug!(
        "{} variables derived, {} entries skipped",
        prepared.synthesis.environment.len(),
        prepared.synthesis.warnings.len()
    );

    let status = DockerCli::new().run(
        &prepared.stack,
        &prepared.synthesis.environment,
        prepared.stdin_replay.as_deref(),
    )?;

    match status.code() {
        Some(code) => Ok(code),
        None => anyhow::bail!("{} was terminated by a signal", DOCKER_PROGRAM),
    }
}
