//! Async source provider trait definition.

use std::fmt::Debug;
use std::io;

use async_trait::async_trait;

use crate::config::GlobOptions;
use crate::error::ReplaceError;

/// Trait for asynchronous content sources.
#[async_trait]
pub trait AsyncSourceProvider: Send + Sync + Debug {
    /// Returns a short name for this provider, used in logs.
    fn id(&self) -> &str;

    /// Expand one pattern into matching paths, in the provider's match order.
    async fn expand(
        &self,
        pattern: &str,
        options: &GlobOptions,
    ) -> Result<Vec<String>, ReplaceError>;

    /// Read the full contents behind `path`.
    async fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}
