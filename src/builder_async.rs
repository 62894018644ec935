//! Async construction helpers for ReplaceBuilder.

use std::sync::Arc;

use crate::builder::ReplaceBuilder;
use crate::engine_async::AsyncReplaceEngine;
use crate::error::ReplaceError;
use crate::io::{AsyncOutputTarget, AsyncSourceProvider, TokioFs};

impl ReplaceBuilder {
    /// Build an async engine working on the local disk through tokio.
    pub fn build_async(self) -> Result<AsyncReplaceEngine, ReplaceError> {
        let fs = Arc::new(TokioFs::new());
        self.build_async_with(fs.clone(), fs)
    }

    /// Build an async engine on top of custom providers.
    pub fn build_async_with(
        self,
        source: Arc<dyn AsyncSourceProvider>,
        target: Arc<dyn AsyncOutputTarget>,
    ) -> Result<AsyncReplaceEngine, ReplaceError> {
        Ok(AsyncReplaceEngine::new(self.plan()?, source, target))
    }
}
