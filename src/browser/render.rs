use std::io::{self, Write};

use super::layout::{LayoutSpec, SEPARATOR_WIDTH};
use super::style::Role;
use super::Streams;
use crate::model::ApiRecord;

const CLEAR_AND_HOME: &str = "\x1b[2J\x1b[H";
const COLUMN_ZERO: &str = "\x1b[0G";

/// Value width used by the stacked layout.
const STACKED_VALUE_WIDTH: usize = 48;
const STACKED_LABEL_WIDTH: usize = 13;

/// Column widths of the single-shot table.
const STATIC_ID_WIDTH: usize = 36;
const STATIC_NAME_WIDTH: usize = 28;
const STATIC_PATH_WIDTH: usize = 18;

const NAV_HINT: &str = "a/\u{2190} prev   d/\u{2192} next   r refresh   q quit";

pub fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    if max <= 3 {
        return s.chars().take(max).collect();
    }
    let mut out: String = s.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Line discipline for one render target. Raw mode disables output
/// post-processing, so interactive lines need an explicit carriage return.
#[derive(Clone, Copy)]
enum Mode {
    Interactive,
    Static,
}

impl Mode {
    fn eol(self) -> &'static str {
        match self {
            Mode::Interactive => "\r\n",
            Mode::Static => "\n",
        }
    }
}

fn chrome_line(out: &mut Streams<'_>, mode: Mode, text: &str, role: Role) -> io::Result<()> {
    let painted = out.chrome_style.paint(text, role);
    match mode {
        Mode::Interactive => write!(out.chrome, "{}{}{}", COLUMN_ZERO, painted, mode.eol()),
        Mode::Static => write!(out.chrome, "{}{}", painted, mode.eol()),
    }
}

fn content_line(
    out: &mut Streams<'_>,
    mode: Mode,
    text: &str,
    role: Option<Role>,
) -> io::Result<()> {
    match role {
        Some(role) => {
            let painted = out.content_style.paint(text, role);
            write!(out.content, "{}{}", painted, mode.eol())
        }
        None => write!(out.content, "{}{}", text, mode.eol()),
    }
}

fn banner(out: &mut Streams<'_>, mode: Mode, title: &str) -> io::Result<()> {
    let inner = format!(" {} ", title);
    let bar = "\u{2500}".repeat(inner.chars().count());
    chrome_line(out, mode, &format!("\u{256d}{}\u{256e}", bar), Role::Banner)?;
    chrome_line(out, mode, &format!("\u{2502}{}\u{2502}", inner), Role::Banner)?;
    chrome_line(out, mode, &format!("\u{2570}{}\u{256f}", bar), Role::Banner)
}

fn table_row(cells: [&str; 3], widths: [usize; 3]) -> String {
    let [id, name, path] = cells;
    let [iw, nw, pw] = widths;
    format!(
        "{:<iw$} | {:<nw$} | {}",
        truncate_with_ellipsis(id, iw),
        truncate_with_ellipsis(name, nw),
        truncate_with_ellipsis(path, pw),
    )
}

fn table(
    out: &mut Streams<'_>,
    mode: Mode,
    widths: [usize; 3],
    records: &[ApiRecord],
) -> io::Result<()> {
    let header = table_row(["ID", "Name", "Listen Path"], widths);
    content_line(out, mode, &header, Some(Role::Header))?;
    let total = widths.iter().sum::<usize>() + SEPARATOR_WIDTH;
    content_line(out, mode, &"-".repeat(total), Some(Role::Divider))?;
    for r in records {
        let row = table_row([r.id.as_str(), r.name.as_str(), r.listen_path.as_str()], widths);
        content_line(out, mode, &row, None)?;
    }
    Ok(())
}

fn stacked(out: &mut Streams<'_>, mode: Mode, records: &[ApiRecord]) -> io::Result<()> {
    let rule = "-".repeat(STACKED_LABEL_WIDTH + STACKED_VALUE_WIDTH);
    for r in records {
        content_line(out, mode, &rule, Some(Role::Divider))?;
        let fields = [
            ("ID:", &r.id),
            ("Name:", &r.name),
            ("Listen Path:", &r.listen_path),
        ];
        for (label, value) in fields {
            let label = format!("{:<w$}", label, w = STACKED_LABEL_WIDTH);
            let line = format!(
                "{}{}",
                out.content_style.paint(&label, Role::Label),
                truncate_with_ellipsis(value, STACKED_VALUE_WIDTH)
            );
            content_line(out, mode, &line, None)?;
        }
    }
    content_line(out, mode, &rule, Some(Role::Divider))
}

/// Draw one interactive frame: clear, banner, the page body in the layout's
/// form, then the navigation hint.
pub fn render_page(
    out: &mut Streams<'_>,
    layout: LayoutSpec,
    page: u32,
    records: &[ApiRecord],
) -> io::Result<()> {
    let mode = Mode::Interactive;
    write!(out.chrome, "{}", CLEAR_AND_HOME)?;
    banner(out, mode, &format!("APIs \u{00b7} page {}", page))?;

    if records.is_empty() {
        chrome_line(out, mode, "No more APIs.", Role::Notice)?;
    } else if layout.stacked {
        out.flush()?;
        stacked(out, mode, records)?;
    } else {
        out.flush()?;
        let widths = [layout.id_width, layout.name_width, layout.path_width];
        table(out, mode, widths, records)?;
    }

    out.flush()?;
    chrome_line(out, mode, "", Role::Hint)?;
    chrome_line(out, mode, NAV_HINT, Role::Hint)?;
    out.flush()
}

/// Single-shot page print for non-interactive `api list`.
pub fn render_static_page(
    out: &mut Streams<'_>,
    page: u32,
    records: &[ApiRecord],
) -> io::Result<()> {
    let mode = Mode::Static;
    banner(out, mode, &format!("APIs \u{00b7} page {}", page))?;
    if records.is_empty() {
        chrome_line(out, mode, &format!("No APIs found on page {}.", page), Role::Notice)?;
        return out.flush();
    }
    out.flush()?;
    let widths = [STATIC_ID_WIDTH, STATIC_NAME_WIDTH, STATIC_PATH_WIDTH];
    table(out, mode, widths, records)?;
    out.flush()?;
    chrome_line(
        out,
        mode,
        &format!("Showing page {}. Use --page {} to see more.", page, page + 1),
        Role::Hint,
    )?;
    out.flush()
}

#[cfg(test)]
#[path = "../tests/browser/render_tests.rs"]
mod tests;
