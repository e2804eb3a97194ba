use std::io::IsTerminal;

use crossterm::style::Stylize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Banner,
    Header,
    Divider,
    Hint,
    Label,
    Notice,
}

/// Decides whether text gets ANSI color. Renderers always go through
/// `paint` and never emit color codes directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Color when `stream` is a terminal and `NO_COLOR` is unset.
    pub fn detect(stream: &impl IsTerminal) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && stream.is_terminal())
    }

    pub fn paint(&self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        match role {
            Role::Banner => text.bold().cyan().to_string(),
            Role::Header => text.bold().yellow().to_string(),
            Role::Divider => text.dark_grey().to_string(),
            Role::Hint => text.dark_grey().to_string(),
            Role::Label => text.bold().to_string(),
            Role::Notice => text.magenta().to_string(),
        }
    }
}
