//! # mdcontents
//!
//! Generate a nested, numbered table of contents for a markdown document.
//!
//! Headings are found with a single forward scan over the text. Each one
//! becomes a list line whose number restarts under every new parent and whose
//! link points at an anchor derived from the heading text.
//!
//! ## Example
//!
//! ```rust
//! use mdcontents::{Contents, generate_contents};
//!
//! let markdown = r#"
//! # Introduction
//! Some content here.
//!
//! ## Background
//! More details.
//!
//! ## Methodology
//! Research approach.
//! "#;
//!
//! print!("{}", generate_contents(markdown));
//! // 1. [Introduction](#introduction)
//! //     1. [Background](#background)
//! //     2. [Methodology](#methodology)
//!
//! let contents = Contents::from_text(markdown);
//! assert_eq!(contents.entries[2].path, vec![1, 2]);
//! ```

/// Configuration module for persisting user preferences.
///
/// Provides the indentation, depth and output settings read from
/// `config.toml`.
pub mod config;

/// Input handling module for stdin and file sources.
pub mod input;

/// Tracing subscriber setup for the binary.
pub mod logging;

/// Parser module: heading scanner and contents generation.
pub mod parser;

// Re-export commonly used types for convenience
pub use config::Config;
pub use parser::{Contents, ContentsEntry, Heading, RenderOptions, generate_contents, parse_file};
