//! Internal tests, grouped by module.

#[cfg(feature = "json")]
mod cli;
mod config;
mod engine;
