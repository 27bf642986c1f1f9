//! # mdcontents
//!
//! Print a numbered table of contents for a markdown file, followed by the
//! file itself.
//!
//! ## Usage
//!
//! ```sh
//! mdcontents README.md
//! mdcontents --no-source -L 2 README.md
//! cat README.md | mdcontents -
//! ```

mod cli;

use clap::{CommandFactory, Parser as ClapParser};
use cli::{Cli, OutputFormat, USAGE};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use mdcontents::input::{self, InputSource};
use mdcontents::{Config, Contents, parser};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    mdcontents::logging::init_tracing(args.verbose);

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Cli::command(), "mdcontents", &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::load();
    args.apply_overrides(&mut config);

    if args.save_config {
        let path = config.save().wrap_err("failed to save configuration")?;
        eprintln!("Saved configuration to {}", path.display());
        if args.files.is_empty() {
            return Ok(());
        }
    }

    let [file] = args.files.as_slice() else {
        println!("{}", USAGE);
        return Ok(());
    };

    let source = input::determine_input_source(file);
    let markdown_text = match source.read() {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let contents = Contents::from_text(&markdown_text);
    tracing::info!(
        source = %source.name(),
        headings = contents.len(),
        max_depth = contents.max_depth(),
        "generated contents"
    );

    if args.in_place {
        return write_in_place(&source, &contents, &config);
    }

    match args.output {
        OutputFormat::Plain => print_plain(&contents, &markdown_text, &config),
        OutputFormat::Json => print_json(&contents, &source, &config),
    }
}

/// Contents text as printed: the list, a blank line, then the document.
fn render_plain(contents: &Contents, markdown_text: &str, config: &Config) -> String {
    let rendered = contents.render(&config.render_options());
    if config.contents.print_source {
        format!("{}\n{}", rendered, markdown_text)
    } else {
        rendered
    }
}

fn print_plain(contents: &Contents, markdown_text: &str, config: &Config) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(render_plain(contents, markdown_text, config).as_bytes())
        .and_then(|_| stdout.flush())
        .wrap_err("failed to write contents")
}

fn print_json(contents: &Contents, source: &InputSource, config: &Config) -> Result<()> {
    let max_level = config.render_options().max_level;
    let output = parser::build_json_output(contents, Some(&source.name()), max_level);
    let json = serde_json::to_string_pretty(&output)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)
        .and_then(|_| stdout.flush())
        .wrap_err("failed to write contents")
}

fn write_in_place(source: &InputSource, contents: &Contents, config: &Config) -> Result<()> {
    let InputSource::File(path) = source else {
        eprintln!("Error: --in-place needs a file, not stdin");
        process::exit(1);
    };

    // The file keeps its own bytes; only the contents block is added
    let original = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let new_content = prepend_contents(contents, &original, config);

    // Write to a temp file next to the target, then rename over it
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir)
        .wrap_err("failed to create temp file")?;
    temp_file
        .write_all(new_content.as_bytes())
        .wrap_err("failed to write temp file")?;
    temp_file.flush().wrap_err("failed to flush temp file")?;
    temp_file
        .persist(path)
        .map_err(|e| eyre!("failed to save {}: {}", path.display(), e))?;

    tracing::info!(path = %path.display(), "rewrote file with contents");
    Ok(())
}

/// The contents and a blank line in front of `original`, using its line endings.
fn prepend_contents(contents: &Contents, original: &str, config: &Config) -> String {
    let newline = if original.contains("\r\n") { "\r\n" } else { "\n" };
    let rendered = contents
        .render(&config.render_options())
        .replace('\n', newline);
    format!("{}{}{}", rendered, newline, original)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_with_source() {
        let text = "# Title\nBody\n";
        let contents = Contents::from_text(text);
        let rendered = render_plain(&contents, text, &Config::default());
        assert_eq!(rendered, "1. [Title](#title)\n\n# Title\nBody\n");
    }

    #[test]
    fn test_render_plain_without_source() {
        let text = "# Title\n## Part\n";
        let contents = Contents::from_text(text);
        let mut config = Config::default();
        config.contents.print_source = false;
        config.contents.indent_width = 2;
        assert_eq!(
            render_plain(&contents, text, &config),
            "1. [Title](#title)\n  1. [Part](#part)\n"
        );
    }

    #[test]
    fn test_write_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Doc\n## Notes\n").unwrap();

        let source = InputSource::File(path.clone());
        let text = source.read().unwrap();
        let contents = Contents::from_text(&text);
        let mut config = Config::default();
        config.contents.print_source = false;
        write_in_place(&source, &contents, &config).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1. [Doc](#doc)\n    1. [Notes](#notes)\n\n# Doc\n## Notes\n"
        );
    }

    #[test]
    fn test_write_in_place_keeps_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Doc\r\nbody\r\nlast").unwrap();

        let source = InputSource::File(path.clone());
        let contents = Contents::from_text(&source.read().unwrap());
        write_in_place(&source, &contents, &Config::default()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "1. [Doc](#doc)\r\n\r\n# Doc\r\nbody\r\nlast"
        );
    }

    #[test]
    fn test_prepend_contents_unix_text_unchanged() {
        let original = "# A\n## B";
        let contents = Contents::from_text(original);
        assert_eq!(
            prepend_contents(&contents, original, &Config::default()),
            "1. [A](#a)\n    1. [B](#b)\n\n# A\n## B"
        );
    }
}
