//! The argument bundle accepted by both entry points.

use std::path::PathBuf;

use super::{GlobOptions, ReadOptions, WriteOptions};
use crate::replace::{Needle, Replacement};

/// Arguments for a single replace run.
///
/// `strategy` stays a string so that an unknown name is reported the same way
/// by the sync and the async entry point.
#[derive(Debug, Clone)]
pub struct ReplaceArgs {
    pub needle: Needle,
    pub replacement: Replacement,
    pub strategy: Option<String>,
    /// Inline content. Takes precedence over `input`.
    pub content: Option<String>,
    /// Paths or glob patterns, expanded in the given order.
    pub input: Option<Vec<String>>,
    pub input_read_options: Option<ReadOptions>,
    pub input_glob_options: Option<GlobOptions>,
    /// Output file for `join`, output directory for the other strategies.
    pub output: Option<PathBuf>,
    pub output_write_options: Option<WriteOptions>,
    /// Separator used by `join`. Defaults to a newline.
    pub output_join_string: Option<String>,
}

impl ReplaceArgs {
    pub fn new(needle: impl Into<Needle>, replacement: impl Into<Replacement>) -> Self {
        Self {
            needle: needle.into(),
            replacement: replacement.into(),
            strategy: None,
            content: None,
            input: None,
            input_read_options: None,
            input_glob_options: None,
            output: None,
            output_write_options: None,
            output_join_string: None,
        }
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Add one path or glob pattern to the input list.
    pub fn add_input(mut self, pattern: impl Into<String>) -> Self {
        self.input
            .get_or_insert_with(Vec::new)
            .push(pattern.into());
        self
    }

    pub fn with_inputs<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_read_options(mut self, options: impl Into<ReadOptions>) -> Self {
        self.input_read_options = Some(options.into());
        self
    }

    pub fn with_glob_options(mut self, options: GlobOptions) -> Self {
        self.input_glob_options = Some(options);
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_write_options(mut self, options: impl Into<WriteOptions>) -> Self {
        self.output_write_options = Some(options.into());
        self
    }

    pub fn with_join_string(mut self, join: impl Into<String>) -> Self {
        self.output_join_string = Some(join.into());
        self
    }
}
