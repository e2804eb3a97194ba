use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::keys::{ByteSource, Command, decode_key};
use super::layout::compute_layout;
use super::render::render_page;
use super::session::{TerminalControl, TerminalSession};
use super::{FETCH_TIMEOUT, PageProvider, Streams};

/// What the browser does after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Fetch and render the given page.
    Load(u32),
    /// Keep the current frame and wait for another key.
    Stay,
    Exit,
}

/// `shown` is the number of records on the page currently displayed; an
/// empty page means there is nothing after it.
pub fn transition(current: u32, command: Command, shown: usize) -> Transition {
    match command {
        Command::Quit => Transition::Exit,
        Command::Refresh => Transition::Load(current),
        Command::Prev => Transition::Load(current.saturating_sub(1).max(1)),
        Command::Next if shown > 0 => Transition::Load(current + 1),
        Command::Next => Transition::Load(current),
        Command::Ignored => Transition::Stay,
    }
}

/// Run the interactive browser starting at `start_page` until the user quits
/// or a fetch fails. The terminal is restored on every way out.
pub fn browse<P, K, T>(
    provider: &mut P,
    keys: &mut K,
    term: &mut T,
    out: &mut Streams<'_>,
    start_page: u32,
) -> Result<()>
where
    P: PageProvider + ?Sized,
    K: ByteSource + ?Sized,
    T: TerminalControl + ?Sized,
{
    if !term.is_interactive() {
        anyhow::bail!("interactive mode requires a terminal on stdin");
    }

    let session = TerminalSession::acquire(term)?;
    let mut current = start_page.max(1);

    loop {
        debug!(page = current, "fetching page");
        let records = provider.fetch_page(current, FETCH_TIMEOUT)?;

        let layout = compute_layout(session.width());
        render_page(out, layout, current, &records).context("render page")?;

        let next = loop {
            let command = decode_key(keys).context("read key")?;
            match transition(current, command, records.len()) {
                Transition::Stay => continue,
                other => {
                    debug!(?command, "navigation");
                    break other;
                }
            }
        };

        match next {
            Transition::Load(page) => current = page,
            _ => {
                write!(out.chrome, "\x1b[0GBye.\r\n").context("write exit message")?;
                out.flush().context("flush output")?;
                info!(page = current, "browser closed");
                return session.release();
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/browser/controller_tests.rs"]
mod tests;
