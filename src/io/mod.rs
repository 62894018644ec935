//! File system abstractions for sources and output targets.
//!
//! This module provides:
//! - `SourceProvider`: Trait for glob expansion and reading
//! - `OutputTarget`: Trait for writing results
//! - `LocalFs`: The local disk
//! - `InMemoryFs`: A shared in-memory file map for testing

mod input;
mod memory;
mod output;
mod std_io;

pub use input::SourceProvider;
pub use memory::InMemoryFs;
pub use output::OutputTarget;
pub use std_io::LocalFs;

// Async I/O support
#[cfg(feature = "async")]
mod async_input;
#[cfg(feature = "async")]
mod async_output;
#[cfg(feature = "async")]
mod async_std_io;

#[cfg(feature = "async")]
pub use async_input::AsyncSourceProvider;
#[cfg(feature = "async")]
pub use async_output::AsyncOutputTarget;
#[cfg(feature = "async")]
pub use async_std_io::TokioFs;
