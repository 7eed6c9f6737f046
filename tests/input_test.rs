//! Tests for reading outline input

use std::path::Path;

use tempfile::TempDir;

use treeify::cli::CliError;
use treeify::exitcode;
use treeify::infrastructure::{read_input, InfraError};

#[test]
fn given_existing_file_when_reading_then_returns_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("outline.txt");
    std::fs::write(&path, "root\n  child\n").unwrap();

    let content = read_input(Some(&path)).unwrap();

    assert_eq!(content, "root\n  child\n");
}

#[test]
fn given_missing_file_when_reading_then_not_found_with_noinput_exit_code() {
    let err = read_input(Some(Path::new("/nonexistent/outline.txt"))).unwrap_err();

    assert!(matches!(err, InfraError::NotFound(_)));
    assert_eq!(CliError::from(err).exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_invalid_outline_when_mapping_error_then_dataerr_exit_code() {
    let err = treeify::application::TreeifyService::default()
        .render("a\nb")
        .unwrap_err();

    assert_eq!(CliError::from(err).exit_code(), exitcode::DATAERR);
}
