//! Tokio-backed local disk implementation.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use super::std_io::glob_local;
use super::{AsyncOutputTarget, AsyncSourceProvider};
use crate::config::GlobOptions;
use crate::error::{ReplaceError, SingleIoError, Stage};

/// Async counterpart of [`LocalFs`](super::LocalFs).
///
/// Directory walking for glob expansion runs on tokio's blocking pool; reads
/// and writes use `tokio::fs`.
#[derive(Debug, Clone)]
pub struct TokioFs {
    id: String,
}

impl TokioFs {
    pub fn new() -> Self {
        Self { id: "tokio".into() }
    }
}

impl Default for TokioFs {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncSourceProvider for TokioFs {
    fn id(&self) -> &str {
        &self.id
    }

    async fn expand(
        &self,
        pattern: &str,
        options: &GlobOptions,
    ) -> Result<Vec<String>, ReplaceError> {
        let owned = pattern.to_string();
        let options = *options;
        tokio::task::spawn_blocking(move || glob_local(&owned, &options))
            .await
            .map_err(|e| {
                ReplaceError::from(SingleIoError::new(
                    Stage::Resolve,
                    pattern,
                    io::Error::other(e),
                ))
            })?
    }

    async fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }
}

#[async_trait]
impl AsyncOutputTarget for TokioFs {
    fn id(&self) -> &str {
        &self.id
    }

    async fn write(&self, path: &Path, data: &[u8], append: bool) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .await?;
        file.write_all(data).await?;
        file.flush().await
    }
}
