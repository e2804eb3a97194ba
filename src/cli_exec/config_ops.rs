use anyhow::{Context, Result};

use apictl::model::Environment;

use crate::cli_runtime::CliContext;
use crate::cli_subcommands::ConfigCommands;

#[derive(serde::Serialize)]
struct EnvSummary<'a> {
    name: &'a str,
    dashboard_url: &'a str,
    token: String,
    current: bool,
}

pub(super) fn handle_config_command(ctx: &CliContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::AddEnv { name, url, token } => {
            ctx.store.add_env(&name, &url, &token)?;
            println!("Environment {} saved to {}", name, ctx.store.path().display());
        }
        ConfigCommands::Use { name } => {
            ctx.store.use_env(&name)?;
            println!("Now using {}", name);
        }
        ConfigCommands::Remove { name } => {
            ctx.store.remove_env(&name)?;
            println!("Removed {}", name);
        }
        ConfigCommands::List { json } => {
            let cfg = ctx.store.read()?;
            let envs: Vec<EnvSummary<'_>> = cfg
                .environments
                .iter()
                .map(|(name, env)| EnvSummary {
                    name,
                    dashboard_url: &env.dashboard_url,
                    token: env.masked_token(),
                    current: cfg.current.as_deref() == Some(name.as_str()),
                })
                .collect();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&envs).context("serialize environments json")?
                );
            } else if envs.is_empty() {
                println!("No environments configured");
            } else {
                for e in envs {
                    let marker = if e.current { "*" } else { " " };
                    println!("{} {} {}", marker, e.name, e.dashboard_url);
                }
            }
        }
        ConfigCommands::Show { json } => {
            let target = ctx.target()?;
            let masked = Environment {
                dashboard_url: target.dashboard_url.clone(),
                token: target.token.clone(),
            }
            .masked_token();
            let name = target.env_name.as_deref().unwrap_or("(environment variables)");
            if json {
                let v = serde_json::json!({
                    "name": target.env_name,
                    "dashboard_url": target.dashboard_url,
                    "token": masked,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&v).context("serialize environment json")?
                );
            } else {
                println!("env: {}", name);
                println!("url: {}", target.dashboard_url);
                println!("token: {}", masked);
            }
        }
    }
    Ok(())
}
