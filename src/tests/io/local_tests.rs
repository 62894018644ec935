//! Tests for the local disk provider.

use std::fs;
use std::io;

use tempfile::TempDir;

use crate::config::GlobOptions;
use crate::error::ReplaceError;
use crate::io::{LocalFs, OutputTarget, SourceProvider};

fn tree() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("docs/sub")).unwrap();
    fs::write(dir.path().join("docs/b.txt"), "b").unwrap();
    fs::write(dir.path().join("docs/a.txt"), "a").unwrap();
    fs::write(dir.path().join("docs/sub/c.txt"), "c").unwrap();
    dir
}

fn pattern(dir: &TempDir, rest: &str) -> String {
    format!("{}/{rest}", dir.path().display())
}

#[test]
fn glob_lists_files_alphabetically() {
    let dir = tree();
    let fs = LocalFs::new();
    let paths = fs.expand(&pattern(&dir, "docs/*.txt"), &GlobOptions::default()).unwrap();
    let names: Vec<_> = paths.iter().map(|p| crate::strategy::base_name(p)).collect();
    assert_eq!(names, ["a.txt", "b.txt"]);
}

#[test]
fn glob_skips_directories_by_default() {
    let dir = tree();
    let fs = LocalFs::new();
    let paths = fs.expand(&pattern(&dir, "docs/*"), &GlobOptions::default()).unwrap();
    assert_eq!(paths.len(), 2);

    let options = GlobOptions {
        only_directories: true,
        ..GlobOptions::default()
    };
    let dirs = fs.expand(&pattern(&dir, "docs/*"), &options).unwrap();
    assert_eq!(dirs.len(), 1);
    assert!(dirs[0].ends_with("sub"));
}

#[test]
fn recursive_glob_reaches_nested_files() {
    let dir = tree();
    let paths = LocalFs::new()
        .expand(&pattern(&dir, "docs/**/*.txt"), &GlobOptions::default())
        .unwrap();
    assert_eq!(paths.len(), 3);
}

#[test]
fn plain_path_to_missing_file_matches_nothing() {
    let dir = tree();
    let paths = LocalFs::new()
        .expand(&pattern(&dir, "docs/missing.txt"), &GlobOptions::default())
        .unwrap();
    assert!(paths.is_empty());
}

#[test]
fn bad_pattern_is_invalid_glob() {
    let err = LocalFs::new()
        .expand("docs/[", &GlobOptions::default())
        .expect_err("bad pattern");
    assert!(matches!(err, ReplaceError::InvalidGlob { .. }));
}

#[test]
fn write_creates_missing_parents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep/er/out.txt");
    LocalFs::new().write(&path, b"hello", false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
}

#[test]
fn write_appends_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let local = LocalFs::new();
    local.write(&path, b"one", false).unwrap();
    local.write(&path, b"two", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "onetwo");
    local.write(&path, b"three", false).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "three");
}

#[test]
fn read_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = LocalFs::new()
        .read(&dir.path().join("nope").display().to_string())
        .expect_err("missing");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
