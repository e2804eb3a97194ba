/// Column widths for the tabular API list, or a request to fall back to the
/// stacked (one block per record) form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutSpec {
    pub id_width: usize,
    pub name_width: usize,
    pub path_width: usize,
    pub stacked: bool,
}

impl LayoutSpec {
    const STACKED: LayoutSpec = LayoutSpec {
        id_width: 0,
        name_width: 0,
        path_width: 0,
        stacked: true,
    };
}

/// Two `" | "` separators.
pub(super) const SEPARATOR_WIDTH: usize = 6;

const MIN_TERMINAL_WIDTH: usize = 20;
const MIN_CONTENT_WIDTH: usize = 15;

const MIN_ID: usize = 12;
const MIN_NAME: usize = 14;
const MIN_PATH: usize = 10;

const DEFAULT_ID: usize = 16;
const DEFAULT_NAME: usize = 20;
const DEFAULT_PATH: usize = 14;

/// Largest amount a single column gives up while shrinking.
const MAX_SHRINK: usize = 8;

const GROW_NAME: usize = 30;
const GROW_ID: usize = 20;
const GROW_PATH: usize = 12;

pub fn compute_layout(terminal_width: u16) -> LayoutSpec {
    let width = usize::from(terminal_width);
    if width < MIN_TERMINAL_WIDTH {
        return LayoutSpec::STACKED;
    }
    let content = width - SEPARATOR_WIDTH;
    if content < MIN_CONTENT_WIDTH || content < MIN_ID + MIN_NAME + MIN_PATH {
        return LayoutSpec::STACKED;
    }

    let mut id = DEFAULT_ID;
    let mut name = DEFAULT_NAME;
    let mut path = DEFAULT_PATH;
    let defaults = DEFAULT_ID + DEFAULT_NAME + DEFAULT_PATH;

    if content < defaults {
        // Single pass, id gives first so the name column survives longest.
        let mut deficit = defaults - content;
        for (col, min) in [(&mut id, MIN_ID), (&mut name, MIN_NAME), (&mut path, MIN_PATH)] {
            let give = MAX_SHRINK.min(*col - min).min(deficit);
            *col -= give;
            deficit -= give;
        }
        if deficit > 0 {
            return LayoutSpec::STACKED;
        }
    } else if content > defaults {
        // Surplus beyond every column's growth allowance stays unused.
        let mut surplus = content - defaults;
        for (col, cap) in [(&mut name, GROW_NAME), (&mut id, GROW_ID), (&mut path, GROW_PATH)] {
            let take = cap.min(surplus);
            *col += take;
            surplus -= take;
        }
    }

    LayoutSpec {
        id_width: id,
        name_width: name,
        path_width: path,
        stacked: false,
    }
}

#[cfg(test)]
#[path = "../tests/browser/layout_tests.rs"]
mod tests;
