use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use apictl::model::Target;
use apictl::store::{ConfigStore, Overrides};

use crate::Commands;

#[derive(Parser)]
#[command(name = "apictl")]
#[command(about = "API management dashboard client", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to $APICTL_CONFIG or ~/.apictl/config.json)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Environment to use instead of the current one
    #[arg(long = "env", global = true, value_name = "NAME")]
    env_name: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Per-invocation settings shared by every command handler.
pub(crate) struct CliContext {
    pub(crate) store: ConfigStore,
    pub(crate) overrides: Overrides,
}

impl CliContext {
    pub(crate) fn target(&self) -> Result<Target> {
        self.store.resolve(&self.overrides)
    }
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let ctx = CliContext {
        store: ConfigStore::open(ConfigStore::default_path(cli.config)?),
        overrides: Overrides::from_process(cli.env_name),
    };
    crate::cli_exec::handle_command(&ctx, cli.command)
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.is_empty() => EnvFilter::try_new(spec)?,
        _ if verbose => EnvFilter::new("apictl=debug"),
        _ => EnvFilter::new("apictl=warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
