//! # multireplace
//!
//! Find-and-replace over inline content, files and glob patterns.
//!
//! ## Overview
//!
//! multireplace provides:
//! - **Literal or regex needles**: literal needles are matched verbatim, regex
//!   needles honor `g`, `i` and `m` flags
//! - **String or closure replacements**: closures receive the regex captures
//! - **Multiple sources**: inline content, paths, or glob patterns
//! - **Output strategies**: `join` into one result, `flatten` into base file
//!   names, or `preserve-structure` under an output directory
//! - **Sync and Async**: both engines share one validated plan and return
//!   identical results, in the same order
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use multireplace::{Needle, ReplaceArgs, replace_sync};
//!
//! fn main() -> Result<(), multireplace::ReplaceError> {
//!     let args = ReplaceArgs::new(Needle::regex("^[adjox]", "gm")?, "ą|")
//!         .add_input("notes/**/*.txt")
//!         .with_strategy("preserve-structure")
//!         .with_output("out");
//!
//!     for result in replace_sync(args)? {
//!         println!("wrote {}", result.path);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `async` - `AsyncReplaceEngine` and `replace_async` on tokio (enabled by default)
//! - `json` - JSON job files (enabled by default)
//! - `yaml` - YAML job files
//! - `miette` - Pretty error reporting with miette
//! - `cli` - The `multireplace` binary
//!
//! ## Ordering
//!
//! Results always follow resolution order: patterns in the order given, and
//! within a pattern the order the glob expansion reports. In the async engine
//! reads overlap, but aggregation waits for all of them and re-establishes
//! that order before anything is joined or written.

// Core modules
pub mod builder;
#[cfg(feature = "json")]
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod plan;
pub mod replace;
pub mod source;
pub mod strategy;

// Async modules (feature-gated)
#[cfg(feature = "async")]
pub mod builder_async;
#[cfg(feature = "async")]
pub mod engine_async;

// Re-exports for convenience
pub use builder::ReplaceBuilder;
pub use config::{GlobOptions, JobConfig, ReadOptions, ReplaceArgs, WriteOptions};
pub use engine::ReplaceEngine;
pub use error::{ReplaceError, SingleIoError, Stage};
pub use io::{InMemoryFs, LocalFs, OutputTarget, SourceProvider};
pub use plan::ReplacePlan;
pub use replace::{Needle, Replacement, Replacer};
pub use strategy::{FileResult, Strategy};

// Async re-exports
#[cfg(feature = "async")]
pub use engine_async::AsyncReplaceEngine;
#[cfg(feature = "async")]
pub use io::{AsyncOutputTarget, AsyncSourceProvider, TokioFs};

/// Run a replace on the local disk, blocking the calling thread.
pub fn replace_sync(args: ReplaceArgs) -> Result<Vec<FileResult>, ReplaceError> {
    ReplaceBuilder::new(args).build()?.run()
}

/// Run a replace on the local disk through tokio.
///
/// Configuration errors surface as an `Err` from the returned future, the
/// same way I/O errors do.
#[cfg(feature = "async")]
pub async fn replace_async(args: ReplaceArgs) -> Result<Vec<FileResult>, ReplaceError> {
    ReplaceBuilder::new(args).build_async()?.run().await
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ReplaceDiagnostic;

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
