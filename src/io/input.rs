//! Source provider trait definition.

use std::fmt::Debug;
use std::io;

use crate::config::GlobOptions;
use crate::error::ReplaceError;

/// Trait for synchronous content sources.
///
/// Implementors expand glob patterns into identifiers and read the raw bytes
/// behind an identifier, e.g. from the local disk or an in-memory map.
pub trait SourceProvider: Send + Sync + Debug {
    /// Returns a short name for this provider, used in logs.
    fn id(&self) -> &str;

    /// Expand one pattern into matching paths, in the provider's match order.
    ///
    /// A plain path is a pattern that matches itself. No match is an empty
    /// list, not an error.
    fn expand(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>, ReplaceError>;

    /// Read the full contents behind `path`.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;
}
