//! CLI tests.

mod parse_tests;
