//! Configuration tests.

mod args_tests;
