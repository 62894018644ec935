//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ReplaceError, SingleIoError};

/// A diagnostic wrapper for replace errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReplaceDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<SingleIoError> for ReplaceDiagnostic {
    fn from(e: SingleIoError) -> Self {
        let help = match e.stage {
            super::Stage::Resolve => "Check that the input pattern points at readable directories",
            super::Stage::Read => "Check that the input files exist and match the read encoding",
            super::Stage::Write => "Check the output path permissions and the write encoding",
        };
        ReplaceDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(Box::new(e.error)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<ReplaceError> for ReplaceDiagnostic {
    fn from(err: ReplaceError) -> Self {
        match err {
            ReplaceError::Io(e) => ReplaceDiagnostic::from(e),
            other => ReplaceDiagnostic {
                message: other.to_string(),
                source: None,
                help: Some(
                    "Valid strategies are join, flatten and preserve-structure; \
                     regex flags are g, i and m"
                        .into(),
                ),
                severity: Severity::Error,
            },
        }
    }
}

impl From<ReplaceError> for miette::Report {
    fn from(err: ReplaceError) -> Self {
        miette::Report::new(ReplaceDiagnostic::from(err))
    }
}
