//! Asynchronous replace engine.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::error::{ReplaceError, SingleIoError, Stage};
use crate::io::{AsyncOutputTarget, AsyncSourceProvider};
use crate::plan::{self, PendingWrite, ReplacePlan};
use crate::source::{self, Source};
use crate::strategy::FileResult;

/// Default number of files read or written at the same time.
pub const DEFAULT_CONCURRENCY: usize = 32;

/// Runs a plan with overlapping reads and writes.
///
/// Produces exactly what [`ReplaceEngine`](crate::ReplaceEngine) produces for
/// the same plan and file system snapshot.
pub struct AsyncReplaceEngine {
    plan: ReplacePlan,
    source: Arc<dyn AsyncSourceProvider>,
    target: Arc<dyn AsyncOutputTarget>,
    concurrency: usize,
}

impl AsyncReplaceEngine {
    pub fn new(
        plan: ReplacePlan,
        source: Arc<dyn AsyncSourceProvider>,
        target: Arc<dyn AsyncOutputTarget>,
    ) -> Self {
        Self {
            plan,
            source,
            target,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Limit how many files are in flight at once. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn plan(&self) -> &ReplacePlan {
        &self.plan
    }

    /// Resolve, substitute, aggregate and (if an output is set) write.
    ///
    /// Aggregation starts only once every source is substituted. The first
    /// failing read or write fails the whole run. Writes to distinct paths
    /// overlap; writes sharing a path run in result order.
    pub async fn run(&self) -> Result<Vec<FileResult>, ReplaceError> {
        let results = self.read_all().await?;
        let results = self.plan.aggregate(results);

        let Some(output) = self.plan.output() else {
            info!(strategy = %self.plan.strategy(), results = results.len(), "replace finished");
            return Ok(results);
        };

        let pending = self.plan.pending_writes(output, results)?;
        let batches: Vec<Vec<(usize, FileResult)>> =
            stream::iter(plan::batch_by_destination(pending))
                .map(|batch| self.write_batch(batch))
                .buffered(self.concurrency)
                .try_collect()
                .await?;

        let mut written: Vec<(usize, FileResult)> = batches.into_iter().flatten().collect();
        written.sort_unstable_by_key(|(index, _)| *index);
        let written: Vec<FileResult> = written.into_iter().map(|(_, result)| result).collect();

        info!(strategy = %self.plan.strategy(), written = written.len(), "replace finished");
        Ok(written)
    }

    /// Read and substitute every source.
    ///
    /// Reads overlap, but results come back in resolution order, not in
    /// completion order.
    pub async fn read_all(&self) -> Result<Vec<FileResult>, ReplaceError> {
        match self.plan.source() {
            Source::Content(content) => Ok(vec![self.plan.substitute_content(content)]),
            Source::Patterns(patterns) => {
                let paths = source::resolve_paths_async(
                    &*self.source,
                    patterns,
                    self.plan.glob_options(),
                )
                .await?;

                stream::iter(paths)
                    .map(|path| self.read_one(path))
                    .buffered(self.concurrency)
                    .try_collect()
                    .await
            }
        }
    }

    async fn read_one(&self, path: String) -> Result<FileResult, ReplaceError> {
        let raw = self
            .source
            .read(&path)
            .await
            .map_err(|e| source::read_error(&path, e))?;
        self.plan.substitute(path, raw)
    }

    /// Writes to one destination, one after the other.
    async fn write_batch(
        &self,
        batch: Vec<(usize, PendingWrite)>,
    ) -> Result<Vec<(usize, FileResult)>, ReplaceError> {
        let mut done = Vec::with_capacity(batch.len());
        for (index, write) in batch {
            done.push((index, self.write_one(write).await?));
        }
        Ok(done)
    }

    async fn write_one(&self, write: PendingWrite) -> Result<FileResult, ReplaceError> {
        debug!(path = %write.result.path, bytes = write.bytes.len(), "writing result");
        self.target
            .write(write.path(), &write.bytes, self.plan.append())
            .await
            .map_err(|e| SingleIoError::new(Stage::Write, write.result.path.clone(), e))?;
        Ok(write.result)
    }
}
