//! Single-pass heading scanner.
//!
//! Walks the document once, left to right, and yields every line that looks
//! like an ATX heading (`#` to `######`, then at least one space or tab, then
//! some non-blank text). Anything else is skipped a whole line at a time.

use super::utils::{is_layout_whitespace, trim_trailing_whitespace};
use serde::Serialize;

/// Deepest heading level markdown allows.
pub const MAX_LEVEL: usize = 6;

/// A heading line recognized by the [`Scanner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Number of leading `#` characters (1-6)
    pub level: usize,
    /// Heading text with trailing whitespace removed
    pub name: String,
}

/// Cursor over the characters of a document, yielding [`Heading`]s.
///
/// The cursor never moves backwards; every call to [`Iterator::next`] either
/// returns a heading or exhausts the input.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Whether the current character exists and satisfies `predicate`.
    fn check(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.chars.get(self.pos).is_some_and(|&c| predicate(c))
    }

    /// Advance while the current character satisfies `predicate`, returning
    /// how many characters were consumed.
    fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while self.check(&predicate) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn skip_whitespace(&mut self) {
        self.consume_while(is_layout_whitespace);
    }

    /// Skip to just past the next newline (or past the end of input).
    fn skip_line(&mut self) {
        self.consume_while(|c| c != '\n');
        self.pos += 1;
    }

    /// Collect everything up to, but not including, the next newline.
    fn take_line(&mut self) -> String {
        let start = self.pos;
        self.consume_while(|c| c != '\n');
        self.chars[start..self.pos].iter().collect()
    }

    /// Consume a heading marker and return its level.
    ///
    /// The marker is a run of 1-6 `#` followed by at least one space or tab.
    /// Returns `None` when the current line does not start with one.
    fn heading_level(&mut self) -> Option<usize> {
        let level = self.consume_while(|c| c == '#');
        if level == 0 {
            return None;
        }

        let separator = self.consume_while(|c| is_layout_whitespace(c) && c != '\n');
        if separator == 0 {
            tracing::debug!(level, "heading marker without separating whitespace");
            return None;
        }

        if level > MAX_LEVEL {
            tracing::debug!(level, "heading marker too deep");
            return None;
        }

        Some(level)
    }
}

impl Iterator for Scanner {
    type Item = Heading;

    fn next(&mut self) -> Option<Heading> {
        while !self.at_end() {
            self.skip_whitespace();

            let Some(level) = self.heading_level() else {
                self.skip_line();
                continue;
            };

            let line = self.take_line();
            let name = trim_trailing_whitespace(&line);
            if name.is_empty() {
                tracing::debug!(level, "empty heading skipped");
                self.skip_line();
                continue;
            }

            tracing::debug!(level, name, "heading found");
            return Some(Heading {
                level,
                name: name.to_string(),
            });
        }

        None
    }
}

/// Scan `text` and collect every heading it contains.
pub fn scan_headings(text: &str) -> Vec<Heading> {
    Scanner::new(text).collect()
}
