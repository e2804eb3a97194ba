use anyhow::Result;

use crate::Commands;
use crate::cli_runtime::CliContext;

mod api_ops;
mod config_ops;

pub(crate) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Config { command } => config_ops::handle_config_command(ctx, command),
        Commands::Api { command } => api_ops::handle_api_command(ctx, command),
    }
}
