use clap::Parser;

use docker_deploy::application::{DeployOptions, DocumentSource, DEFAULT_COMPOSE_FILE};

/// docker-deploy - docker stack deploy with versioned configs and secrets
///
/// Every config and secret with a `name` in the compose files gets an
/// environment variable named after its file (e.g. `nginx.conf` ->
/// `NGINX_CONF`) holding a short hash of the file content, so names like
/// `nginx.${NGINX_CONF}` change whenever the file does.
#[derive(Parser, Debug)]
#[command(name = "docker-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Arguments after the options are passed to 'docker stack deploy'. \
Without any, the current directory name is used as the stack name.")]
pub struct Cli {
    /// Path to a Compose file, or '-' to read from stdin
    #[arg(
        short = 'c',
        long = "compose-file",
        value_name = "FILE",
        value_delimiter = ',',
        default_value = DEFAULT_COMPOSE_FILE
    )]
    pub compose_files: Vec<String>,

    /// Send registry authentication details to Swarm agents
    #[arg(short = 'a', long)]
    pub with_registry_auth: bool,

    /// Prune services that are no longer referenced
    #[arg(short, long)]
    pub prune: bool,

    /// Daemon socket(s) to connect to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Stack name and extra 'docker stack deploy' arguments
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Deploy options for the application layer
    pub fn deploy_options(&self) -> DeployOptions {
        DeployOptions {
            compose_files: self
                .compose_files
                .iter()
                .map(|f| DocumentSource::parse(f))
                .collect(),
            with_registry_auth: self.with_registry_auth,
            prune: self.prune,
            host: self.host.clone(),
            stack_args: self.args.clone(),
        }
    }

    /// Default tracing filter directive for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
