//! Tests for ReplaceArgs construction.

use std::path::PathBuf;

use crate::config::{GlobOptions, ReplaceArgs};
use crate::replace::{Needle, Replacement};

#[test]
fn new_leaves_every_option_unset() {
    let args = ReplaceArgs::new("a", "b");
    assert!(matches!(args.needle, Needle::Literal(ref s) if s == "a"));
    assert!(matches!(args.replacement, Replacement::Literal(ref s) if s == "b"));
    assert!(args.strategy.is_none());
    assert!(args.content.is_none());
    assert!(args.input.is_none());
    assert!(args.output.is_none());
    assert!(args.output_join_string.is_none());
}

#[test]
fn add_input_accumulates_in_order() {
    let args = ReplaceArgs::new("a", "b")
        .add_input("one/*.txt")
        .add_input("two.txt");
    assert_eq!(
        args.input,
        Some(vec!["one/*.txt".to_string(), "two.txt".to_string()])
    );

    let args = args.with_inputs(["three.txt"]);
    assert_eq!(args.input, Some(vec!["three.txt".to_string()]));
}

#[test]
fn builder_methods_fill_options() {
    let glob = GlobOptions {
        unique: false,
        ..GlobOptions::default()
    };
    let args = ReplaceArgs::new("a", "b")
        .with_content("abc")
        .with_strategy("flatten")
        .with_read_options("latin1")
        .with_glob_options(glob)
        .with_output("out")
        .with_write_options("ascii")
        .with_join_string("--");

    assert_eq!(args.content.as_deref(), Some("abc"));
    assert_eq!(args.strategy.as_deref(), Some("flatten"));
    assert_eq!(args.input_read_options.unwrap().encoding, "latin1");
    assert_eq!(args.input_glob_options, Some(glob));
    assert_eq!(args.output, Some(PathBuf::from("out")));
    assert_eq!(args.output_write_options.unwrap().encoding, "ascii");
    assert_eq!(args.output_join_string.as_deref(), Some("--"));
}
