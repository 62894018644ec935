//! Tests for the in-memory file system.

use std::io;
use std::path::Path;

use crate::config::GlobOptions;
use crate::io::{InMemoryFs, OutputTarget, SourceProvider};

fn fs() -> InMemoryFs {
    InMemoryFs::new()
        .with_file("src/b.txt", "b")
        .with_file("src/a.txt", "a")
        .with_file("src/nested/c.txt", "c")
        .with_file("README.md", "readme")
}

#[test]
fn expand_returns_sorted_matches() {
    let fs = fs();
    let paths = SourceProvider::expand(&fs, "src/*.txt", &GlobOptions::default()).unwrap();
    assert_eq!(paths, ["src/a.txt", "src/b.txt", "src/nested/c.txt"]);
}

#[test]
fn literal_separator_stops_star_at_slash() {
    let fs = fs();
    let options = GlobOptions {
        require_literal_separator: true,
        ..GlobOptions::default()
    };
    let paths = SourceProvider::expand(&fs, "src/*.txt", &options).unwrap();
    assert_eq!(paths, ["src/a.txt", "src/b.txt"]);
}

#[test]
fn case_insensitive_matching() {
    let fs = fs();
    let options = GlobOptions {
        case_sensitive: false,
        ..GlobOptions::default()
    };
    let paths = SourceProvider::expand(&fs, "readme.MD", &options).unwrap();
    assert_eq!(paths, ["README.md"]);
}

#[test]
fn directories_only_matches_nothing_in_memory() {
    let fs = fs();
    let options = GlobOptions {
        only_directories: true,
        ..GlobOptions::default()
    };
    assert!(SourceProvider::expand(&fs, "**", &options).unwrap().is_empty());
}

#[test]
fn invalid_pattern_is_reported() {
    let err = SourceProvider::expand(&fs(), "src/[", &GlobOptions::default())
        .expect_err("bad pattern");
    assert!(err.is_configuration());
}

#[test]
fn failing_reads_keep_path_visible() {
    let fs = fs();
    fs.fail_reads_of("src/z.txt");
    let paths = SourceProvider::expand(&fs, "src/z.txt", &GlobOptions::default()).unwrap();
    assert_eq!(paths, ["src/z.txt"]);

    let err = SourceProvider::read(&fs, "src/z.txt").expect_err("failing path");
    assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
}

#[test]
fn missing_file_is_not_found() {
    let err = SourceProvider::read(&fs(), "nope.txt").expect_err("missing");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn reads_are_logged_in_completion_order() {
    let fs = fs();
    SourceProvider::read(&fs, "src/b.txt").unwrap();
    SourceProvider::read(&fs, "src/a.txt").unwrap();
    assert_eq!(fs.read_log(), ["src/b.txt", "src/a.txt"]);
}

#[test]
fn write_truncates_or_appends() {
    let fs = InMemoryFs::new();
    let path = Path::new("out/x.txt");
    OutputTarget::write(&fs, path, b"one", false).unwrap();
    OutputTarget::write(&fs, path, b"two", false).unwrap();
    assert_eq!(fs.get("out/x.txt").as_deref(), Some("two"));

    OutputTarget::write(&fs, path, b"+three", true).unwrap();
    assert_eq!(fs.get("out/x.txt").as_deref(), Some("two+three"));
}

#[test]
fn clones_share_storage() {
    let fs = InMemoryFs::new();
    let other = fs.clone();
    other.insert("shared.txt", "yes");
    assert_eq!(fs.get("shared.txt").as_deref(), Some("yes"));
    assert_eq!(fs.paths(), ["shared.txt"]);
}
