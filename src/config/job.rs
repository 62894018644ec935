//! Job files describing a replace run in YAML or JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{GlobOptions, ReadOptions, ReplaceArgs, WriteOptions};
use crate::error::{ReplaceError, SingleIoError, Stage};
use crate::replace::{Needle, Replacement};

/// Serializable description of a replace run.
///
/// ```yaml
/// needle: "^[adjox]"
/// flags: gm
/// replacement: "ą|"
/// input: ["src/**/*.txt"]
/// strategy: preserve-structure
/// output: out
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobConfig {
    pub needle: String,
    pub replacement: String,
    /// Regex flags: any of `g`, `i`, `m`. Ignored for literal needles.
    #[serde(default = "default_flags")]
    pub flags: String,
    /// Match the needle verbatim instead of compiling it as a regex.
    #[serde(default)]
    pub literal: bool,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub input: Vec<String>,
    #[serde(default)]
    pub input_read_options: Option<ReadOptions>,
    #[serde(default)]
    pub input_glob_options: Option<GlobOptions>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub output_write_options: Option<WriteOptions>,
    #[serde(default)]
    pub output_join_string: Option<String>,
}

fn default_flags() -> String {
    "g".to_string()
}

impl JobConfig {
    /// Compile the needle and turn the job into `ReplaceArgs`.
    pub fn into_args(self) -> Result<ReplaceArgs, ReplaceError> {
        let needle = if self.literal {
            Needle::literal(self.needle)
        } else {
            Needle::regex(&self.needle, &self.flags)?
        };

        Ok(ReplaceArgs {
            needle,
            replacement: Replacement::Literal(self.replacement),
            strategy: self.strategy,
            content: self.content,
            input: (!self.input.is_empty()).then_some(self.input),
            input_read_options: self.input_read_options,
            input_glob_options: self.input_glob_options,
            output: self.output,
            output_write_options: self.output_write_options,
            output_join_string: self.output_join_string,
        })
    }

    /// Parse a job from a string in the given format.
    pub fn from_str_with(source: &str, format: JobFormat) -> Result<Self, ReplaceError> {
        match format {
            #[cfg(feature = "json")]
            JobFormat::Json => serde_json::from_str(source)
                .map_err(|e| ReplaceError::config(format!("invalid job config: {e}"))),
            #[cfg(feature = "yaml")]
            JobFormat::Yaml => serde_yaml::from_str(source)
                .map_err(|e| ReplaceError::config(format!("invalid job config: {e}"))),
            #[allow(unreachable_patterns)]
            other => Err(ReplaceError::config(format!(
                "job config format {other:?} is not enabled in this build"
            ))),
        }
    }

    /// Load a job file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self, ReplaceError> {
        let format = JobFormat::from_path(path).ok_or_else(|| {
            ReplaceError::config(format!(
                "cannot infer job config format from {}; use .json, .yaml or .yml",
                path.display()
            ))
        })?;
        let source = std::fs::read_to_string(path)
            .map_err(|e| SingleIoError::new(Stage::Read, path.display().to_string(), e))?;
        Self::from_str_with(&source, format)
    }
}

/// Serialization formats a job file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFormat {
    Json,
    Yaml,
}

impl JobFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(JobFormat::Json),
            "yaml" | "yml" => Some(JobFormat::Yaml),
            _ => None,
        }
    }
}
