use crate::cli::{parse_glob_options, parse_read_options, parse_write_options};
use crate::error::ReplaceError;

#[test]
fn read_options_from_bare_encoding() {
    let options = parse_read_options(" latin1 ").unwrap();
    assert_eq!(options.encoding, "latin1");
}

#[test]
fn read_options_from_json() {
    let options = parse_read_options(r#"{"encoding": "ascii"}"#).unwrap();
    assert_eq!(options.encoding, "ascii");
}

#[test]
fn write_options_from_json_with_append() {
    let options = parse_write_options(r#"{"append": true}"#).unwrap();
    assert_eq!(options.encoding, "utf8");
    assert!(options.append);
}

#[test]
fn glob_options_require_json() {
    let options = parse_glob_options(r#"{"only_files": false, "unique": false}"#).unwrap();
    assert!(!options.only_files);
    assert!(!options.unique);

    let err = parse_glob_options("case_sensitive").expect_err("not json");
    assert!(matches!(err, ReplaceError::Configuration(_)));
    assert!(err.to_string().contains("--i-glob-opts"));
}

#[test]
fn malformed_json_names_the_flag() {
    let err = parse_write_options("{\"append\": ").expect_err("truncated");
    assert!(err.to_string().contains("--o-write-opts"));
}
