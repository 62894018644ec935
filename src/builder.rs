//! Builder for creating ReplaceEngine instances.

use std::sync::Arc;

use crate::config::ReplaceArgs;
use crate::engine::ReplaceEngine;
use crate::error::ReplaceError;
use crate::io::{LocalFs, OutputTarget, SourceProvider};
use crate::plan::{DEFAULT_JOIN_STRING, ReplacePlan};
use crate::replace::Replacer;
use crate::source::Source;
use crate::strategy::{Strategy, normalize_path};

/// Validates `ReplaceArgs` and wires the result to a file system.
pub struct ReplaceBuilder {
    args: ReplaceArgs,
}

impl ReplaceBuilder {
    pub fn new(args: ReplaceArgs) -> Self {
        Self { args }
    }

    /// Validate the arguments into a plan without choosing an execution mode.
    ///
    /// Source presence is checked before the strategy name.
    pub fn plan(self) -> Result<ReplacePlan, ReplaceError> {
        let args = self.args;

        let source = Source::from_parts(args.content, args.input)?;
        let strategy = match args.strategy.as_deref() {
            Some(name) => name.parse::<Strategy>()?,
            None => Strategy::default(),
        };
        let replacer = Replacer::new(args.needle, args.replacement)?;

        Ok(ReplacePlan {
            replacer,
            strategy,
            source,
            read_options: args.input_read_options.unwrap_or_default(),
            glob_options: args.input_glob_options.unwrap_or_default(),
            output: args.output.as_deref().map(normalize_path),
            write_options: args.output_write_options.unwrap_or_default(),
            join_string: args
                .output_join_string
                .unwrap_or_else(|| DEFAULT_JOIN_STRING.to_string()),
        })
    }

    /// Build a sync engine working on the local disk.
    pub fn build(self) -> Result<ReplaceEngine, ReplaceError> {
        let fs = Arc::new(LocalFs::new());
        self.build_with(fs.clone(), fs)
    }

    /// Build a sync engine on top of custom providers.
    pub fn build_with(
        self,
        source: Arc<dyn SourceProvider>,
        target: Arc<dyn OutputTarget>,
    ) -> Result<ReplaceEngine, ReplaceError> {
        Ok(ReplaceEngine::new(self.plan()?, source, target))
    }
}

impl From<ReplaceArgs> for ReplaceBuilder {
    fn from(args: ReplaceArgs) -> Self {
        Self::new(args)
    }
}
