use std::error::Error as _;
use std::path::Path;

use tempfile::TempDir;
use walkdir::WalkDir;

use super::*;

fn missing_dir_walk_error(root: &Path) -> walkdir::Error {
    WalkDir::new(root)
        .into_iter()
        .find_map(std::result::Result::err)
        .expect("walking a missing directory should fail")
}

#[test]
fn walk_error_records_failing_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    let err = VibeLintError::walk(temp_dir.path(), missing_dir_walk_error(&missing));

    match &err {
        VibeLintError::Walk { path, .. } => assert_eq!(path, &missing),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("Failed to walk directory"));
    assert!(err.source().is_some());
}

#[test]
fn io_error_converts_via_from() {
    let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: VibeLintError = io_err.into();
    assert!(matches!(err, VibeLintError::Io(_)));
    assert!(err.to_string().contains("pipe closed"));
}

#[test]
fn json_error_converts_via_from() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: VibeLintError = json_err.into();
    assert!(matches!(err, VibeLintError::JsonSerialize(_)));
}
