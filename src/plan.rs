//! The execution-mode independent part of a replace run.
//!
//! A `ReplacePlan` is a validated `ReplaceArgs`. It knows how to turn raw
//! bytes into a `FileResult`, how to aggregate results, and where each result
//! is written, but never performs I/O itself. The sync and async engines only
//! differ in how they drive the reads and writes around it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::config::{GlobOptions, ReadOptions, WriteOptions};
use crate::error::{ReplaceError, SingleIoError, Stage};
use crate::replace::Replacer;
use crate::source::{Source, read_error};
use crate::strategy::{FileResult, Strategy};

pub(crate) const DEFAULT_JOIN_STRING: &str = "\n";

#[derive(Debug, Clone)]
pub struct ReplacePlan {
    pub(crate) replacer: Replacer,
    pub(crate) strategy: Strategy,
    pub(crate) source: Source,
    pub(crate) read_options: ReadOptions,
    pub(crate) glob_options: GlobOptions,
    pub(crate) output: Option<PathBuf>,
    pub(crate) write_options: WriteOptions,
    pub(crate) join_string: String,
}

/// A result ready to be persisted: its final identifier plus encoded bytes.
#[derive(Debug, Clone)]
pub struct PendingWrite {
    pub result: FileResult,
    pub bytes: Vec<u8>,
}

impl PendingWrite {
    pub fn path(&self) -> &Path {
        Path::new(&self.result.path)
    }
}

impl ReplacePlan {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn glob_options(&self) -> &GlobOptions {
        &self.glob_options
    }

    /// Normalized output path, if results are persisted.
    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn join_string(&self) -> &str {
        &self.join_string
    }

    /// Transform inline content.
    pub fn substitute_content(&self, content: &str) -> FileResult {
        FileResult::new("", self.replacer.apply(content))
    }

    /// Decode the raw bytes read from `path` and transform them.
    pub fn substitute(&self, path: String, raw: Vec<u8>) -> Result<FileResult, ReplaceError> {
        let text = self
            .read_options
            .decode(raw)
            .map_err(|e| read_error(&path, e))?;
        let content = self.replacer.apply(&text);
        trace!(path = %path, before = text.len(), after = content.len(), "substituted");
        Ok(FileResult { path, content })
    }

    pub fn aggregate(&self, results: Vec<FileResult>) -> Vec<FileResult> {
        self.strategy.aggregate(results, &self.join_string)
    }

    /// Compute the destination under `output` and encode the content of every
    /// aggregated result.
    pub fn pending_writes(
        &self,
        output: &Path,
        results: Vec<FileResult>,
    ) -> Result<Vec<PendingWrite>, ReplaceError> {
        results
            .into_iter()
            .map(|result| -> Result<PendingWrite, ReplaceError> {
                let destination = self.strategy.destination(output, &result.path);
                let target = destination.to_string_lossy().into_owned();
                let bytes = self
                    .write_options
                    .encode(&result.content)
                    .map_err(|e| SingleIoError::new(Stage::Write, target.clone(), e))?;
                Ok(PendingWrite {
                    result: FileResult::new(target, result.content),
                    bytes,
                })
            })
            .collect()
    }

    pub fn append(&self) -> bool {
        self.write_options.append
    }
}

/// Group writes by destination path.
///
/// Each write keeps its index in `pending`. Batches are ordered by the first
/// write they hold, and writes inside a batch stay in `pending` order, so
/// running each batch sequentially persists what a plain in-order loop would.
pub fn batch_by_destination(pending: Vec<PendingWrite>) -> Vec<Vec<(usize, PendingWrite)>> {
    let mut slots: HashMap<PathBuf, usize> = HashMap::new();
    let mut batches: Vec<Vec<(usize, PendingWrite)>> = Vec::new();

    for (index, write) in pending.into_iter().enumerate() {
        let slot = *slots.entry(write.path().to_path_buf()).or_insert_with(|| {
            batches.push(Vec::new());
            batches.len() - 1
        });
        batches[slot].push((index, write));
    }

    batches
}
