use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Printed when the tool is not given exactly one file.
pub const USAGE: &str = "One argument required: path to markdown file";

#[derive(Parser, Debug)]
#[command(name = "mdcontents")]
#[command(version)]
#[command(about = "Generate a numbered table of contents for a markdown file")]
#[command(
    long_about = "mdcontents - Print a nested, numbered table of contents for a markdown file,\n\
    followed by the file itself.\n\n\
    Every line starting with 1-6 '#' characters and a space becomes an entry linking\n\
    to the heading's anchor.\n\n\
    Examples:\n  \
    mdcontents README.md                 # Contents, then the document\n  \
    mdcontents --no-source README.md     # Contents only\n  \
    mdcontents -L 2 README.md            # Only # and ## headings\n  \
    mdcontents -o json README.md         # Entries as JSON\n  \
    cat doc.md | mdcontents -            # Read from stdin\n  \
    mdcontents -i CHANGES.md             # Prepend contents to the file"
)]
pub struct Cli {
    /// Markdown file to process, or '-' for stdin
    ///
    /// Exactly one file is expected; anything else prints a usage message.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Output format
    ///
    ///   plain - Contents followed by the original text (default)
    ///   json  - Entries with level, number, path, title and slug
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Print only the contents, not the original document
    #[arg(long = "no-source")]
    pub no_source: bool,

    /// Spaces per nesting level, 0-16 (overrides config)
    #[arg(
        long = "indent",
        value_name = "WIDTH",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(0..=mdcontents::parser::MAX_INDENT_WIDTH as u64)
    )]
    pub indent: Option<usize>,

    /// Deepest heading level to list, 1-6 (overrides config)
    ///
    /// Deeper headings still count towards numbering but are not shown.
    #[arg(
        short = 'L',
        long = "max-level",
        value_name = "LEVEL",
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    pub max_level: Option<u8>,

    /// Rewrite the file with the contents prepended
    ///
    /// The file is replaced atomically. Not available for stdin.
    #[arg(short = 'i', long = "in-place")]
    pub in_place: bool,

    /// Save the effective indent/level/source settings as the new defaults
    #[arg(long = "save-config")]
    pub save_config: bool,

    /// Print a shell completion script and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Contents then source text
    Plain,
    /// JSON output
    Json,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut mdcontents::Config) {
        if let Some(width) = self.indent {
            config.contents.indent_width = width;
        }
        if let Some(level) = self.max_level {
            config.contents.max_level = level as usize;
        }
        if self.no_source {
            config.contents.print_source = false;
        }
    }
}
