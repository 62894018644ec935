//! Error types for multireplace operations.
//!
//! This module provides:
//! - `ReplaceError`: The error returned by every entry point
//! - `Stage`: Indicates where an I/O error occurred in the pipeline
//! - `SingleIoError`: A single file system error with context

use std::fmt;
use std::io;

use thiserror::Error;

/// Tag prepended to configuration error messages so callers can match on them.
pub const NAMESPACE: &str = "multireplace";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Expanding a glob pattern into paths
    Resolve,
    Read,
    /// Creating parent directories or writing the output file
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Read => write!(f, "Read"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

#[derive(Debug)]
pub struct SingleIoError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Path the operation was working on
    pub target: String,
    /// The underlying error
    pub error: io::Error,
}

impl SingleIoError {
    pub fn new(stage: Stage, target: impl Into<String>, error: io::Error) -> Self {
        Self {
            stage,
            target: target.into(),
            error,
        }
    }

    /// Kind of the underlying `io::Error`.
    pub fn io_kind(&self) -> io::ErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for SingleIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for SingleIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[derive(Debug, Error)]
pub enum ReplaceError {
    /// Invalid combination of arguments, reported before any I/O happens.
    #[error("multireplace :: {0}")]
    Configuration(String),

    #[error("multireplace :: invalid needle pattern: {0}")]
    InvalidNeedle(#[from] regex::Error),

    #[error("multireplace :: invalid glob pattern {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// File system failure, passed through with the stage and path attached.
    #[error(transparent)]
    Io(#[from] SingleIoError),
}

impl ReplaceError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        ReplaceError::Configuration(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ReplaceError::Configuration(_)
                | ReplaceError::InvalidNeedle(_)
                | ReplaceError::InvalidGlob { .. }
        )
    }

    /// The I/O error behind this failure, if any.
    pub fn as_io(&self) -> Option<&SingleIoError> {
        match self {
            ReplaceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
