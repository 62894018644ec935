//! Tests for Needle, Replacement and Replacer.

use regex::Captures;

use crate::error::ReplaceError;
use crate::replace::{Needle, Replacement, Replacer, replace_literal};

const CONTENT: &str = "aąbcćdeęfg%hi\njklmn\noópqr,stuvwxyZ";

fn replacer(needle: Needle, replacement: impl Into<Replacement>) -> Replacer {
    Replacer::new(needle, replacement.into()).expect("valid replacer")
}

#[test]
fn literal_replaces_every_occurrence_left_to_right() {
    assert_eq!(replace_literal("abcabcab", "ab", "X"), "XcXcX");
    assert_eq!(replace_literal("aaaa", "aa", "b"), "bb");
    assert_eq!(replace_literal("none here", "zz", "X"), "none here");
}

#[test]
fn literal_needle_ignores_regex_metacharacters() {
    let r = replacer(Needle::literal("a.b"), "X");
    assert_eq!(r.apply("a.b axb a.b"), "X axb X");

    let r = replacer(Needle::literal("$1"), "[$1]");
    assert_eq!(r.apply("cost: $1"), "cost: [$1]");
}

#[test]
fn empty_literal_needle_leaves_content_unchanged() {
    let r = replacer(Needle::literal(""), "X");
    assert_eq!(r.apply("abc"), "abc");
}

#[test]
fn multiline_global_regex_replaces_line_starts() {
    let r = replacer(Needle::regex("^[adjox]", "gm").unwrap(), "ą|");
    assert_eq!(r.apply(CONTENT), "ą|ąbcćdeęfg%hi\ną|klmn\ną|ópqr,stuvwxyZ");
}

#[test]
fn regex_without_global_flag_replaces_first_match_only() {
    let r = replacer(Needle::regex("o", "").unwrap(), "0");
    assert_eq!(r.apply("foo boo"), "f0o boo");

    let r = replacer(Needle::regex("o", "g").unwrap(), "0");
    assert_eq!(r.apply("foo boo"), "f00 b00");
}

#[test]
fn case_insensitive_flag_is_honored() {
    let r = replacer(Needle::regex("abc", "gi").unwrap(), "x");
    assert_eq!(r.apply("ABC abc AbC"), "x x x");
}

#[test]
fn regex_literal_replacement_expands_groups() {
    let r = replacer(Needle::regex(r"(\w+)@(\w+)", "g").unwrap(), "$2 at ${1}");
    assert_eq!(r.apply("me@home you@work"), "home at me work at you");
}

#[test]
fn closure_replacement_receives_captures() {
    let r = replacer(
        Needle::regex(r"\d+", "g").unwrap(),
        Replacement::with_fn(|caps: &Captures<'_>| {
            let n: u32 = caps[0].parse().unwrap();
            (n * 2).to_string()
        }),
    );
    assert_eq!(r.apply("1 + 20 = 21"), "2 + 40 = 42");
}

#[test]
fn closure_with_literal_needle_matches_verbatim() {
    let r = replacer(
        Needle::literal("a+b"),
        Replacement::with_fn(|caps: &Captures<'_>| caps[0].to_uppercase()),
    );
    assert_eq!(r.apply("a+b aab a+b"), "A+B aab A+B");
}

#[test]
fn substitution_is_idempotent_once_needle_is_gone() {
    let r = replacer(Needle::regex("^[adjox]", "gm").unwrap(), "ą|");
    let once = r.apply(CONTENT);
    let twice = replacer(Needle::literal("zzz"), "q").apply(&once);
    assert_eq!(once, twice);

    let r = replacer(Needle::literal("cat"), "dog");
    let once = r.apply("cat cat");
    assert_eq!(r.apply(&once), once);
}

#[test]
fn unsupported_flag_is_a_configuration_error() {
    let err = Needle::regex("a", "gx").expect_err("x is not a flag");
    assert!(matches!(err, ReplaceError::Configuration(_)));
    assert!(err.to_string().contains("'x'"));
}

#[test]
fn repeated_flag_is_a_configuration_error() {
    let err = Needle::regex("a", "gg").expect_err("g given twice");
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn malformed_pattern_is_reported() {
    let err = Needle::regex("(unclosed", "g").expect_err("bad regex");
    assert!(matches!(err, ReplaceError::InvalidNeedle(_)));
    assert!(err.is_configuration());
}

#[test]
fn multiline_anchors_honor_crlf_and_lone_cr() {
    let r = replacer(Needle::regex("^[abc]", "gm").unwrap(), "#");
    assert_eq!(r.apply("a1\r\nb2\rc3"), "#1\r\n#2\r#3");

    let r = replacer(Needle::regex("o$", "gm").unwrap(), "X");
    assert_eq!(r.apply("foo\r\nbar\ngo"), "foX\r\nbar\ngX");
}

#[test]
fn line_separator_chars_do_not_break_lines() {
    let r = replacer(Needle::regex("^b", "gm").unwrap(), "#");
    assert_eq!(r.apply("a\u{2028}b"), "a\u{2028}b");
}
