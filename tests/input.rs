//! Loading documents from disk.

use mdcontents::input::{InputError, InputSource, determine_input_source, read_file};
use std::fs;

#[test]
fn reads_file_and_terminates_last_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, "# Title\r\nBody").unwrap();

    assert_eq!(read_file(&path).unwrap(), "# Title\nBody\n");
}

#[test]
fn input_source_reads_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "## Notes\n").unwrap();

    let source = determine_input_source(&path);
    assert_eq!(source, InputSource::File(path.clone()));
    assert_eq!(source.read().unwrap(), "## Notes\n");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.md");

    let err = read_file(&path).unwrap_err();
    assert!(matches!(err, InputError::NotFound(ref p) if p == &path));
    assert!(err.to_string().starts_with("No such file: "));
}

#[test]
fn directory_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = read_file(dir.path()).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
    assert!(err.to_string().starts_with("Error while reading file: "));
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.md");
    fs::write(&path, [0x23, 0x20, 0xff, 0xfe, 0x0a]).unwrap();

    assert!(matches!(read_file(&path), Err(InputError::Io(_))));
}
