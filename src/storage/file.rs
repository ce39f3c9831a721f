//! Local directory transport
//!
//! Serves datasets from a deployment root on disk, e.g. the `public/`
//! directory the export writes into.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{FinboardError, FinboardResult};

use super::Transport;

/// Reads datasets relative to a root directory
#[derive(Debug, Clone)]
pub struct FileTransport {
    root: PathBuf,
}

impl FileTransport {
    /// Create a transport rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Transport for FileTransport {
    async fn fetch(&self, path: &str) -> FinboardResult<Vec<u8>> {
        let full_path = self.root.join(path);
        tracing::debug!(path = %full_path.display(), "reading dataset");

        tokio::fs::read(&full_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FinboardError::not_found(path),
            _ => FinboardError::Io(format!("Failed to read {}: {}", full_path.display(), e)),
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
