//! Numbered contents built from scanned headings.

use super::scanner::{Heading, MAX_LEVEL, Scanner};
use super::utils::format_anchor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width of one indentation unit in rendered contents.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Widest indentation unit accepted from options or configuration.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Running counters, one per open heading depth (index 0 is level 1).
///
/// The stack length always equals the level of the last heading entered.
#[derive(Debug, Default)]
struct LevelStack {
    counters: Vec<usize>,
}

impl LevelStack {
    /// Enter a heading at `level` and return its number at that depth.
    ///
    /// Skipped intermediate levels are opened at zero. Deeper levels are
    /// dropped, so their numbering restarts when they are reopened.
    fn enter(&mut self, level: usize) -> usize {
        // Grows with zero counters or drops the deeper ones
        self.counters.resize(level, 0);

        let number = match self.counters.last_mut() {
            Some(top) => {
                *top += 1;
                *top
            }
            None => 0,
        };
        tracing::trace!(level, stack = ?self.counters, "level stack updated");
        number
    }

    fn path(&self) -> Vec<usize> {
        self.counters.clone()
    }
}

/// One line of the contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsEntry {
    /// Heading level (1-6)
    pub level: usize,
    /// Position among siblings at this level, starting at 1
    pub number: usize,
    /// Counters of every open level, outermost first
    pub path: Vec<usize>,
    /// Heading text as written
    pub title: String,
    /// Anchor the entry links to
    pub slug: String,
}

impl ContentsEntry {
    /// Render this entry as a single markdown list line, newline included.
    ///
    /// `indent_width` is capped at [`MAX_INDENT_WIDTH`].
    pub fn to_line(&self, indent_width: usize) -> String {
        let unit = indent_width.min(MAX_INDENT_WIDTH);
        format!(
            "{}{}. [{}](#{})\n",
            " ".repeat(unit * self.level.saturating_sub(1)),
            self.number,
            self.title,
            self.slug
        )
    }
}

/// Rendering options for [`Contents::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Entries deeper than this level are left out
    pub max_level: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_level: MAX_LEVEL,
        }
    }
}

/// The numbered contents of a document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contents {
    pub entries: Vec<ContentsEntry>,
}

impl Contents {
    /// Scan `text` and number every heading found.
    pub fn from_text(text: &str) -> Self {
        Self::from_headings(Scanner::new(text))
    }

    /// Number an already scanned sequence of headings.
    ///
    /// Headings with a level outside `1..=6` are ignored; the scanner never
    /// produces them.
    pub fn from_headings(headings: impl IntoIterator<Item = Heading>) -> Self {
        let mut stack = LevelStack::default();
        let entries = headings
            .into_iter()
            .filter(|heading| (1..=MAX_LEVEL).contains(&heading.level))
            .map(|heading| {
                let number = stack.enter(heading.level);
                ContentsEntry {
                    level: heading.level,
                    number,
                    path: stack.path(),
                    slug: format_anchor(&heading.name),
                    title: heading.name,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deepest heading level present, or 0 when there are no entries.
    pub fn max_depth(&self) -> usize {
        self.entries.iter().map(|e| e.level).max().unwrap_or(0)
    }

    /// Render the contents as text, one line per visible entry.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.entries
            .iter()
            .filter(|entry| entry.level <= options.max_level)
            .map(|entry| entry.to_line(options.indent_width))
            .collect()
    }
}

impl fmt::Display for Contents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}
