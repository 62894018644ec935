//! Local disk implementation.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use super::{OutputTarget, SourceProvider};
use crate::config::GlobOptions;
use crate::error::{ReplaceError, SingleIoError, Stage};

/// Reads, globs and writes on the local file system.
#[derive(Debug, Clone)]
pub struct LocalFs {
    id: String,
}

impl LocalFs {
    pub fn new() -> Self {
        Self { id: "local".into() }
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceProvider for LocalFs {
    fn id(&self) -> &str {
        &self.id
    }

    fn expand(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>, ReplaceError> {
        glob_local(pattern, options)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl OutputTarget for LocalFs {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, path: &Path, data: &[u8], append: bool) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)?;
        file.write_all(data)
    }
}

/// Expand `pattern` against the local disk.
///
/// The glob crate yields entries sorted per directory level, so the result
/// order is stable for a given tree.
pub(crate) fn glob_local(
    pattern: &str,
    options: &GlobOptions,
) -> Result<Vec<String>, ReplaceError> {
    let entries =
        glob::glob_with(pattern, options.match_options()).map_err(|source| {
            ReplaceError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            }
        })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let target = e.path().display().to_string();
            SingleIoError::new(Stage::Resolve, target, e.into_error())
        })?;

        if !options.accepts(path.is_file(), path.is_dir()) {
            trace!(path = %path.display(), "skipping entry filtered by glob options");
            continue;
        }
        paths.push(path.to_string_lossy().into_owned());
    }

    Ok(paths)
}
