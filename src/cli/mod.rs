mod commands;

pub use commands::{Cli, OutputFormat, USAGE};
