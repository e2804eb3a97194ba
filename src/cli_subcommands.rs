use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Add or replace a dashboard environment
    AddEnv {
        name: String,
        /// Dashboard base url, e.g. https://dashboard.example.com
        #[arg(long)]
        url: String,
        /// Dashboard user API key
        #[arg(long)]
        token: String,
    },

    /// Select the environment used by default
    Use { name: String },

    /// Remove an environment
    Remove { name: String },

    /// List configured environments
    List {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the environment this invocation would use
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum ApiCommands {
    /// List API definitions one page at a time
    List {
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Browse pages interactively (arrow keys or a/d, r to refresh, q to quit)
        #[arg(short = 'i', long)]
        interactive: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one API definition as JSON
    Get { api_id: String },

    /// Delete an API definition
    Delete { api_id: String },
}
