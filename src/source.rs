//! Source resolution: turning `content` or `input` into ordered paths.

use std::collections::HashSet;

use tracing::debug;

use crate::config::GlobOptions;
use crate::error::{ReplaceError, SingleIoError, Stage};
use crate::io::SourceProvider;
#[cfg(feature = "async")]
use crate::io::AsyncSourceProvider;

/// Where the content to transform comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A single inline string, identified by the empty path.
    Content(String),
    /// Paths or glob patterns, expanded in order.
    Patterns(Vec<String>),
}

impl Source {
    /// Pick the source from the optional `content` / `input` pair.
    ///
    /// Inline content wins when both are present.
    pub fn from_parts(
        content: Option<String>,
        input: Option<Vec<String>>,
    ) -> Result<Self, ReplaceError> {
        match (content, input) {
            (Some(content), _) => Ok(Source::Content(content)),
            (None, Some(patterns)) => Ok(Source::Patterns(patterns)),
            (None, None) => Err(ReplaceError::config(
                "at least one input source must be defined! Use either 'content' or 'input' param.",
            )),
        }
    }
}

/// Expand every pattern with a sync provider, keeping pattern order.
pub fn resolve_paths(
    provider: &dyn SourceProvider,
    patterns: &[String],
    options: &GlobOptions,
) -> Result<Vec<String>, ReplaceError> {
    let mut collector = PathCollector::new(options.unique);
    for pattern in patterns {
        let matched = provider.expand(pattern, options)?;
        debug!(provider = provider.id(), pattern = %pattern, matched = matched.len(), "expanded input pattern");
        collector.extend(matched);
    }
    Ok(collector.finish())
}

/// Expand every pattern with an async provider, keeping pattern order.
#[cfg(feature = "async")]
pub async fn resolve_paths_async(
    provider: &dyn AsyncSourceProvider,
    patterns: &[String],
    options: &GlobOptions,
) -> Result<Vec<String>, ReplaceError> {
    let mut collector = PathCollector::new(options.unique);
    for pattern in patterns {
        let matched = provider.expand(pattern, options).await?;
        debug!(provider = provider.id(), pattern = %pattern, matched = matched.len(), "expanded input pattern");
        collector.extend(matched);
    }
    Ok(collector.finish())
}

/// Tag a read failure with the path that caused it.
pub(crate) fn read_error(path: &str, error: std::io::Error) -> ReplaceError {
    SingleIoError::new(Stage::Read, path, error).into()
}

struct PathCollector {
    seen: Option<HashSet<String>>,
    paths: Vec<String>,
}

impl PathCollector {
    fn new(unique: bool) -> Self {
        Self {
            seen: unique.then(HashSet::new),
            paths: Vec::new(),
        }
    }

    fn extend(&mut self, matched: Vec<String>) {
        for path in matched {
            if let Some(seen) = self.seen.as_mut()
                && !seen.insert(path.clone())
            {
                continue;
            }
            self.paths.push(path);
        }
    }

    fn finish(self) -> Vec<String> {
        self.paths
    }
}
