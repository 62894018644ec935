//! Output target trait definition.

use std::fmt::Debug;
use std::io;
use std::path::Path;

/// Trait for synchronous output destinations.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a short name for this target, used in logs.
    fn id(&self) -> &str;

    /// Write `data` to `path`, creating missing parent directories first.
    ///
    /// Truncates an existing file unless `append` is set.
    fn write(&self, path: &Path, data: &[u8], append: bool) -> io::Result<()>;
}
