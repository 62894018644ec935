//! CLI integration helpers for multireplace.
//!
//! This module turns command line strings into the typed options of a
//! `ReplaceArgs`. Option flags such as `--i-read-opts` accept either a bare
//! encoding name or a JSON object:
//!
//! ```text
//! multireplace foo bar -i 'src/**/*.txt' --i-read-opts latin1
//! multireplace foo bar -i 'src/**/*.txt' --i-glob-opts '{"case_sensitive": false}'
//! multireplace foo bar -c text -o out.txt --o-write-opts '{"encoding": "utf8", "append": true}'
//! ```

use serde::de::DeserializeOwned;

use crate::config::{GlobOptions, ReadOptions, WriteOptions};
use crate::error::ReplaceError;

#[cfg(feature = "cli")]
mod command;

#[cfg(feature = "cli")]
pub use command::{Cli, Invocation};

/// Parse `--i-read-opts`.
pub fn parse_read_options(raw: &str) -> Result<ReadOptions, ReplaceError> {
    parse_encoding_or_json(raw, "--i-read-opts")
}

/// Parse `--o-write-opts`.
pub fn parse_write_options(raw: &str) -> Result<WriteOptions, ReplaceError> {
    parse_encoding_or_json(raw, "--o-write-opts")
}

/// Parse `--i-glob-opts`. Only the JSON object form is accepted.
pub fn parse_glob_options(raw: &str) -> Result<GlobOptions, ReplaceError> {
    parse_json(raw.trim(), "--i-glob-opts")
}

fn parse_encoding_or_json<T>(raw: &str, flag: &str) -> Result<T, ReplaceError>
where
    T: DeserializeOwned + From<String>,
{
    let raw = raw.trim();
    if raw.starts_with('{') {
        parse_json(raw, flag)
    } else {
        Ok(T::from(raw.to_string()))
    }
}

fn parse_json<T: DeserializeOwned>(raw: &str, flag: &str) -> Result<T, ReplaceError> {
    serde_json::from_str(raw)
        .map_err(|e| ReplaceError::Configuration(format!("invalid {flag} value {raw:?}: {e}")))
}
