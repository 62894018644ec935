//! Synchronous replace engine.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{ReplaceError, SingleIoError, Stage};
use crate::io::{OutputTarget, SourceProvider};
use crate::plan::ReplacePlan;
use crate::source::{self, Source};
use crate::strategy::FileResult;

/// Runs a plan with blocking calls, one step after the other.
pub struct ReplaceEngine {
    plan: ReplacePlan,
    source: Arc<dyn SourceProvider>,
    target: Arc<dyn OutputTarget>,
}

impl ReplaceEngine {
    pub fn new(
        plan: ReplacePlan,
        source: Arc<dyn SourceProvider>,
        target: Arc<dyn OutputTarget>,
    ) -> Self {
        Self {
            plan,
            source,
            target,
        }
    }

    pub fn plan(&self) -> &ReplacePlan {
        &self.plan
    }

    /// Resolve, substitute, aggregate and (if an output is set) write.
    ///
    /// The first error aborts the remaining steps.
    pub fn run(&self) -> Result<Vec<FileResult>, ReplaceError> {
        let results = self.read_all()?;
        let results = self.plan.aggregate(results);

        let Some(output) = self.plan.output() else {
            info!(strategy = %self.plan.strategy(), results = results.len(), "replace finished");
            return Ok(results);
        };

        let pending = self.plan.pending_writes(output, results)?;
        let mut written = Vec::with_capacity(pending.len());
        for write in pending {
            debug!(path = %write.result.path, bytes = write.bytes.len(), "writing result");
            self.target
                .write(write.path(), &write.bytes, self.plan.append())
                .map_err(|e| SingleIoError::new(Stage::Write, write.result.path.clone(), e))?;
            written.push(write.result);
        }

        info!(strategy = %self.plan.strategy(), written = written.len(), "replace finished");
        Ok(written)
    }

    /// Read and substitute every source, in resolution order.
    pub fn read_all(&self) -> Result<Vec<FileResult>, ReplaceError> {
        match self.plan.source() {
            Source::Content(content) => Ok(vec![self.plan.substitute_content(content)]),
            Source::Patterns(patterns) => {
                let paths =
                    source::resolve_paths(&*self.source, patterns, self.plan.glob_options())?;
                paths
                    .into_iter()
                    .map(|path| {
                        let raw = self
                            .source
                            .read(&path)
                            .map_err(|e| source::read_error(&path, e))?;
                        self.plan.substitute(path, raw)
                    })
                    .collect()
            }
        }
    }
}
