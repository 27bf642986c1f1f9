//! Markdown heading scanning and contents generation.
//!
//! This module finds the ATX headings of a document in a single forward pass
//! and turns them into a nested, numbered list of links.
//!
//! It is deliberately not a markdown parser: code fences, setext headings
//! and inline spans are not understood. A heading is any line that starts
//! (after optional whitespace) with one to six `#`, a space or tab, and some
//! text.

pub mod contents;
pub mod output;
pub mod scanner;
pub mod utils;

pub use contents::{
    Contents, ContentsEntry, DEFAULT_INDENT_WIDTH, MAX_INDENT_WIDTH, RenderOptions,
};
pub use output::{ContentsMetadata, ContentsOutput, build_json_output};
pub use scanner::{Heading, MAX_LEVEL, Scanner, scan_headings};

use crate::input::{self, InputError};
use std::path::Path;

/// Generate the contents for a markdown document.
///
/// Each heading becomes one line: four spaces per level below the first, the
/// heading's number among its siblings, then a link to its anchor. Returns an
/// empty string when the document has no headings. Never fails.
///
/// # Examples
///
/// ```
/// use mdcontents::generate_contents;
///
/// let md = "# Guide\n## Install\n## Usage\n";
/// assert_eq!(
///     generate_contents(md),
///     "1. [Guide](#guide)\n    1. [Install](#install)\n    2. [Usage](#usage)\n"
/// );
/// ```
pub fn generate_contents(text: &str) -> String {
    Contents::from_text(text).render(&RenderOptions::default())
}

/// Read a markdown file and build its contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file(path: &Path) -> Result<Contents, InputError> {
    let text = input::read_file(path)?;
    Ok(Contents::from_text(&text))
}
