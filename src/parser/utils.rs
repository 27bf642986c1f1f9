//! Utility functions for heading text.
//!
//! Shared helpers used by the scanner and the contents builder.

use regex::Regex;
use std::sync::OnceLock;

/// Characters treated as inline markup when building an anchor.
const MARKUP_CHARS: &str = r"[*\-_`]";

/// Separators between anchor words: ASCII whitespace only.
const WORD_SEPARATORS: &str = r"[ \t\n\x0B\x0C\r]+";

fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(MARKUP_CHARS).expect("markup pattern is valid"))
}

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(WORD_SEPARATORS).expect("separator pattern is valid"))
}

/// Whitespace as far as heading detection is concerned.
///
/// This is the ASCII control whitespace (tab, newline, vertical tab, form
/// feed, carriage return and the four separators U+001C to U+001F) plus the
/// Unicode space, line and paragraph separators, except the no-break spaces
/// U+00A0, U+2007 and U+202F. U+0085 is not included.
pub fn is_layout_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Remove every markup character (`*`, `-`, `_`, `` ` ``) from a word.
///
/// Unlike a markdown-aware stripper this does not look for matching pairs:
/// every occurrence goes, wherever it sits in the word.
///
/// # Examples
///
/// ```
/// # use mdcontents::parser::utils::strip_markup;
/// assert_eq!(strip_markup("**bold**"), "bold");
/// assert_eq!(strip_markup("snake_case"), "snakecase");
/// assert_eq!(strip_markup("a-b`c"), "abc");
/// ```
pub fn strip_markup(word: &str) -> String {
    markup_pattern().replace_all(word, "").into_owned()
}

/// Format a heading name for use as a same-document link anchor.
///
/// The name is split on runs of ASCII whitespace, each word has its markup
/// characters removed and is lowercased, and the words are joined with single
/// hyphens.
/// Other punctuation is kept as is. A word made only of markup still occupies
/// a slot, so `"a - b"` becomes `"a--b"`. Non-ASCII spaces stay inside
/// their word.
///
/// # Examples
///
/// ```
/// # use mdcontents::parser::utils::format_anchor;
/// assert_eq!(format_anchor("**Hello World!**"), "hello-world!");
/// assert_eq!(format_anchor("Multi   Space"), "multi-space");
/// assert_eq!(format_anchor("Pros - Cons"), "pros--cons");
/// ```
pub fn format_anchor(name: &str) -> String {
    let mut words: Vec<&str> = separator_pattern().split(name).collect();

    // Separators at the end leave no trailing segments
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }

    words
        .iter()
        .map(|word| strip_markup(word).to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Return `text` without its trailing [layout whitespace](is_layout_whitespace).
pub fn trim_trailing_whitespace(text: &str) -> &str {
    text.trim_end_matches(is_layout_whitespace)
}
