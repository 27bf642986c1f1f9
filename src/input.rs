//! Reading markdown text from files or stdin.
//!
//! Input is read line by line and every line is re-terminated with `\n`, so
//! the returned text always ends with a newline (unless it is empty) and
//! Windows line endings come back as plain `\n`.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where the markdown text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input, selected with `-`
    Stdin,
}

impl InputSource {
    /// Read the whole source as text.
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => read_stdin(),
        }
    }

    /// Short name for messages and JSON metadata.
    pub fn name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Errors that can occur while loading input.
#[derive(Debug)]
pub enum InputError {
    /// The path cannot name a file at all
    InvalidPath(String),
    /// The file does not exist
    NotFound(PathBuf),
    /// Any other failure while opening or reading
    Io(io::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidPath(reason) => write!(f, "Invalid path: {}", reason),
            InputError::NotFound(path) => write!(f, "No such file: {}", path.display()),
            InputError::Io(e) => write!(f, "Error while reading file: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Pick the input source for a command-line argument (`-` means stdin).
pub fn determine_input_source(arg: &Path) -> InputSource {
    if arg == Path::new("-") {
        InputSource::Stdin
    } else {
        InputSource::File(arg.to_path_buf())
    }
}

fn validate_path(path: &Path) -> Result<(), InputError> {
    if path.as_os_str().is_empty() {
        return Err(InputError::InvalidPath("empty path".to_string()));
    }
    if path.to_string_lossy().contains('\0') {
        return Err(InputError::InvalidPath(format!(
            "{}: contains a NUL byte",
            path.display()
        )));
    }
    Ok(())
}

/// Read a file's content, one `\n`-terminated line at a time.
///
/// # Errors
///
/// Returns [`InputError::InvalidPath`] for an empty path or one containing a
/// NUL byte, [`InputError::NotFound`] if the file does not exist, and
/// [`InputError::Io`] for anything else (including non-UTF-8 content).
pub fn read_file(path: &Path) -> Result<String, InputError> {
    validate_path(path)?;

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io(e),
    })?;

    let text = read_lines(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(text)
}

/// Read all of stdin, one `\n`-terminated line at a time.
pub fn read_stdin() -> Result<String, InputError> {
    let text = read_lines(io::stdin().lock())?;
    tracing::debug!(bytes = text.len(), "read stdin");
    Ok(text)
}

/// Collect every line of `reader`, terminating each with `\n`.
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<String> {
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line?);
        content.push('\n');
    }
    Ok(content)
}
