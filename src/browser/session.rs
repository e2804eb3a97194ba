use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::{debug, warn};

/// Fallback when the terminal size cannot be queried.
const DEFAULT_WIDTH: u16 = 80;

/// Terminal mode switching used by the browser.
pub trait TerminalControl {
    /// Whether stdin is attached to a terminal.
    fn is_interactive(&self) -> bool;

    /// Current width in columns.
    fn width(&self) -> u16;

    /// Raw mode on, cursor hidden.
    fn enter(&mut self) -> Result<()>;

    /// Cooked mode back, cursor shown.
    fn leave(&mut self) -> Result<()>;
}

/// The process terminal, driven through crossterm. Cursor control goes to
/// stderr alongside the rest of the chrome.
#[derive(Debug, Default)]
pub struct CrosstermTerminal;

impl TerminalControl for CrosstermTerminal {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn width(&self) -> u16 {
        crossterm::terminal::size()
            .map(|(cols, _)| cols)
            .unwrap_or(DEFAULT_WIDTH)
    }

    fn enter(&mut self) -> Result<()> {
        enable_raw_mode().context("enable raw mode")?;
        if let Err(err) = execute!(io::stderr(), Hide) {
            disable_raw_mode().ok();
            return Err(err).context("hide cursor");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        let raw = disable_raw_mode().context("disable raw mode");
        let cursor = execute!(io::stderr(), Show).context("show cursor");
        raw.and(cursor)
    }
}

/// Exclusive hold on raw mode. Dropping the session restores the terminal,
/// so every exit path (including unwinding) releases it exactly once.
pub struct TerminalSession<'a, T: TerminalControl + ?Sized> {
    term: &'a mut T,
    active: bool,
}

impl<'a, T: TerminalControl + ?Sized> TerminalSession<'a, T> {
    pub fn acquire(term: &'a mut T) -> Result<Self> {
        term.enter()?;
        debug!("terminal session acquired");
        Ok(Self { term, active: true })
    }

    pub fn width(&self) -> u16 {
        self.term.width()
    }

    /// Restore the terminal now, reporting failures instead of swallowing them.
    pub fn release(mut self) -> Result<()> {
        self.active = false;
        debug!("terminal session released");
        self.term.leave()
    }
}

impl<T: TerminalControl + ?Sized> Drop for TerminalSession<'_, T> {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        debug!("terminal session released on drop");
        if let Err(err) = self.term.leave() {
            warn!("failed to restore terminal: {:#}", err);
        }
    }
}
