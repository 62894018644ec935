//! In-memory file system for testing.

#[cfg(feature = "async")]
use std::collections::HashMap;
use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
#[cfg(feature = "async")]
use std::time::Duration;

use super::{OutputTarget, SourceProvider};
use crate::config::GlobOptions;
use crate::error::ReplaceError;

/// A path -> bytes map shared between clones.
///
/// Paths are kept sorted, so glob expansion yields them in lexical order.
/// Reads of individual paths can be delayed (async only) or made to fail, and
/// the next async write to a path can be held back, to exercise ordering and
/// fail-fast behavior.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFs {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    #[cfg(feature = "async")]
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    #[cfg(feature = "async")]
    write_delays: Arc<Mutex<HashMap<String, Duration>>>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl InMemoryFs {
    /// Create a new empty file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn insert(&self, path: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.files.lock().unwrap().insert(path.into(), data.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_file(self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(path, data);
        self
    }

    /// Make every read of `path` fail with `PermissionDenied`. The path still
    /// shows up in glob expansion.
    pub fn fail_reads_of(&self, path: impl Into<String>) {
        let path = path.into();
        self.files.lock().unwrap().entry(path.clone()).or_default();
        self.failing.lock().unwrap().insert(path);
    }

    /// Delay async reads of `path` so they complete after faster ones.
    #[cfg(feature = "async")]
    pub fn delay_reads_of(&self, path: impl Into<String>, delay: Duration) {
        self.delays.lock().unwrap().insert(path.into(), delay);
    }

    /// Delay the next async write to `path`. Later writes to it are not
    /// delayed.
    #[cfg(feature = "async")]
    pub fn delay_next_write_to(&self, path: impl Into<String>, delay: Duration) {
        self.write_delays.lock().unwrap().insert(path.into(), delay);
    }

    /// Contents of `path` as a string, if present.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    /// Sorted list of every stored path.
    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    /// Paths in the order reads completed.
    pub fn read_log(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    fn read_now(&self, path: &str) -> io::Result<Vec<u8>> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {path}"),
            ));
        }

        let data = self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })?;
        self.reads.lock().unwrap().push(path.to_string());
        Ok(data)
    }

    fn expand_now(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>, ReplaceError> {
        let matcher = glob::Pattern::new(pattern).map_err(|source| ReplaceError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?;
        let match_options = options.match_options();

        // Every stored entry is a regular file.
        if !options.accepts(true, false) {
            return Ok(Vec::new());
        }

        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|path| matcher.matches_with(path, match_options))
            .cloned()
            .collect())
    }

    fn write_now(&self, path: &Path, data: &[u8], append: bool) {
        let key = path.to_string_lossy().into_owned();
        let mut files = self.files.lock().unwrap();
        if append {
            files.entry(key).or_default().extend_from_slice(data);
        } else {
            files.insert(key, data.to_vec());
        }
    }
}

impl SourceProvider for InMemoryFs {
    fn id(&self) -> &str {
        "memory"
    }

    fn expand(&self, pattern: &str, options: &GlobOptions) -> Result<Vec<String>, ReplaceError> {
        self.expand_now(pattern, options)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.read_now(path)
    }
}

impl OutputTarget for InMemoryFs {
    fn id(&self) -> &str {
        "memory"
    }

    fn write(&self, path: &Path, data: &[u8], append: bool) -> io::Result<()> {
        self.write_now(path, data, append);
        Ok(())
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl super::AsyncSourceProvider for InMemoryFs {
    fn id(&self) -> &str {
        "memory"
    }

    async fn expand(
        &self,
        pattern: &str,
        options: &GlobOptions,
    ) -> Result<Vec<String>, ReplaceError> {
        self.expand_now(pattern, options)
    }

    async fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.read_now(path)
    }
}

#[cfg(feature = "async")]
#[async_trait::async_trait]
impl super::AsyncOutputTarget for InMemoryFs {
    fn id(&self) -> &str {
        "memory"
    }

    async fn write(&self, path: &Path, data: &[u8], append: bool) -> io::Result<()> {
        let key = path.to_string_lossy();
        let delay = self.write_delays.lock().unwrap().remove(key.as_ref());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.write_now(path, data, append);
        Ok(())
    }
}
