//! Configuration types for replace runs.
//!
//! This module provides:
//! - `ReplaceArgs`: The arguments of a single run
//! - `ReadOptions` / `WriteOptions`: Encoding options for input and output files
//! - `GlobOptions`: Glob expansion options for input patterns
//! - `JobConfig`: A run described in a YAML or JSON file

mod args;
mod job;
mod options;

pub use args::ReplaceArgs;
pub use job::{JobConfig, JobFormat};
pub use options::{Encoding, GlobOptions, ReadOptions, WriteOptions};
