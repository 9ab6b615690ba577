//! Content store backed by a JSON catalogue file.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::content::ContentStore;
use crate::errors::ContentStoreError;
use product_indexer_shared::ProductRecord;

/// Reads the catalogue from a file holding a JSON array of product records.
///
/// The file is read on every call, so edits are picked up by the next sync.
#[derive(Debug, Clone)]
pub struct JsonFileContentStore {
    path: PathBuf,
}

impl JsonFileContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentStore for JsonFileContentStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn list_all_products(&self) -> Result<Vec<ProductRecord>, ContentStoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ContentStoreError::io(format!("{}: {}", self.path.display(), e))
        })?;

        let records: Vec<ProductRecord> = serde_json::from_str(&raw).map_err(|e| {
            ContentStoreError::parse(format!("{}: {}", self.path.display(), e))
        })?;

        debug!(record_count = records.len(), "Loaded product catalogue");
        Ok(records)
    }
}
