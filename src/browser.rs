//! Paginated API list rendering: the interactive terminal browser and the
//! single-shot table printer used by `api list`.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;

use crate::model::ApiRecord;

mod controller;
mod keys;
mod layout;
mod render;
mod session;
mod style;

pub use self::controller::{Transition, browse, transition};
pub use self::keys::{ByteSource, Command, StdinBytes, decode_key};
pub use self::layout::{LayoutSpec, compute_layout};
pub use self::render::{render_page, render_static_page, truncate_with_ellipsis};
pub use self::session::{CrosstermTerminal, TerminalControl, TerminalSession};
pub use self::style::{Role, Styler};

/// Upper bound on a single page fetch issued by the interactive browser.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of API list pages. Page indices are 1-based; an empty page means
/// there are no further pages.
pub trait PageProvider {
    fn fetch_page(&mut self, page: u32, timeout: Duration) -> Result<Vec<ApiRecord>>;
}

/// Output sinks for the browser. `content` carries the table itself so it can
/// be piped; `chrome` carries banners, hints and terminal control sequences.
pub struct Streams<'a> {
    pub content: &'a mut dyn Write,
    pub chrome: &'a mut dyn Write,
    pub content_style: Styler,
    pub chrome_style: Styler,
}

impl Streams<'_> {
    pub fn flush(&mut self) -> io::Result<()> {
        self.content.flush()?;
        self.chrome.flush()
    }
}
