//! In-memory implementation of GraphSource
//!
//! Primarily intended for tests and for embedding documents that are
//! already loaded.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{FileLocator, GraphSource, SourceResult};

/// Documents keyed by raw URL
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraphSource {
    documents: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryGraphSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a document under the locator's raw URL
    pub async fn insert(&self, locator: &FileLocator, text: impl Into<String>) {
        let mut documents = self.documents.write().await;
        documents.insert(locator.raw_url(), text.into());
    }

    /// Drop the document for a locator, returning it if present
    pub async fn remove(&self, locator: &FileLocator) -> Option<String> {
        let mut documents = self.documents.write().await;
        documents.remove(&locator.raw_url())
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// True if nothing is stored
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl GraphSource for InMemoryGraphSource {
    async fn fetch(&self, locator: &FileLocator) -> SourceResult<Option<String>> {
        let documents = self.documents.read().await;
        Ok(documents.get(&locator.raw_url()).cloned())
    }
}
