//! Filesystem implementation of GraphSource
//!
//! Serves documents from a local mirror laid out as
//! `<root>/<owner>/<repo>/<reference>/<path>`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::{FileLocator, GraphSource, SourceError, SourceResult};

/// Reads documents from a directory tree
#[derive(Debug, Clone)]
pub struct FsGraphSource {
    root: PathBuf,
}

impl FsGraphSource {
    /// Create a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where a locator lives on disk
    pub fn path_for(&self, locator: &FileLocator) -> PathBuf {
        self.root
            .join(&locator.owner)
            .join(&locator.repo)
            .join(&locator.reference)
            .join(&locator.path)
    }
}

#[async_trait]
impl GraphSource for FsGraphSource {
    async fn fetch(&self, locator: &FileLocator) -> SourceResult<Option<String>> {
        read_path(&self.path_for(locator)).await
    }
}

/// Read a local file. `Ok(None)` if it does not exist.
pub async fn read_path(path: &Path) -> SourceResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No file at {}", path.display());
            Ok(None)
        }
        Err(e) => Err(SourceError::Io {
            path: path.display().to_string(),
            source: e,
        }),
    }
}
