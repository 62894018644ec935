//! Async output target trait definition.

use std::fmt::Debug;
use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Trait for asynchronous output destinations.
#[async_trait]
pub trait AsyncOutputTarget: Send + Sync + Debug {
    /// Returns a short name for this target, used in logs.
    fn id(&self) -> &str;

    /// Write `data` to `path`, creating missing parent directories first.
    async fn write(&self, path: &Path, data: &[u8], append: bool) -> io::Result<()>;
}
