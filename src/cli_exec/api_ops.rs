use std::io;

use anyhow::{Context, Result};
use tracing::info;

use apictl::browser::{
    CrosstermTerminal, StdinBytes, Streams, Styler, browse, render_static_page,
};
use apictl::remote::RemoteClient;

use crate::cli_runtime::CliContext;
use crate::cli_subcommands::ApiCommands;

pub(super) fn handle_api_command(ctx: &CliContext, command: ApiCommands) -> Result<()> {
    match command {
        ApiCommands::List {
            page,
            interactive,
            json,
        } => {
            if interactive && json {
                anyhow::bail!("--interactive cannot be combined with --json");
            }
            let mut client = RemoteClient::new(ctx.target()?)?;
            if interactive {
                return browse_apis(&mut client, page);
            }

            let records = client.list_apis_retrying(page)?.records();
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&records).context("serialize api list json")?
                );
                return Ok(());
            }
            let mut stdout = io::stdout();
            let mut stderr = io::stderr();
            let mut out = Streams {
                content_style: Styler::detect(&stdout),
                chrome_style: Styler::detect(&stderr),
                content: &mut stdout,
                chrome: &mut stderr,
            };
            render_static_page(&mut out, page, &records).context("print api list")?;
        }
        ApiCommands::Get { api_id } => {
            let client = RemoteClient::new(ctx.target()?)?;
            let api = client.get_api(&api_id)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&api).context("serialize api json")?
            );
        }
        ApiCommands::Delete { api_id } => {
            let client = RemoteClient::new(ctx.target()?)?;
            let msg = client.delete_api(&api_id)?;
            info!(api_id = %api_id, status = %msg.status, "api deleted");
            if msg.message.is_empty() {
                println!("Deleted {}", api_id);
            } else {
                println!("Deleted {} ({})", api_id, msg.message);
            }
        }
    }
    Ok(())
}

fn browse_apis(client: &mut RemoteClient, page: u32) -> Result<()> {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut out = Streams {
        content_style: Styler::detect(&stdout),
        chrome_style: Styler::detect(&stderr),
        content: &mut stdout,
        chrome: &mut stderr,
    };
    browse(
        client,
        &mut StdinBytes::new(),
        &mut CrosstermTerminal,
        &mut out,
        page,
    )
}
