use clap::Subcommand;

mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

use cli_subcommands::{ApiCommands, ConfigCommands};

#[derive(Subcommand)]
enum Commands {
    /// Manage dashboard environments
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// List, inspect and delete API definitions
    Api {
        #[command(subcommand)]
        command: ApiCommands,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
