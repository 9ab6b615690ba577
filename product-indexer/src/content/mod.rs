//! Content store access.
//!
//! The content store owns the product catalogue; the indexer only reads it,
//! always in full.

mod json_file_store;

use async_trait::async_trait;

use crate::errors::ContentStoreError;
use product_indexer_shared::ProductRecord;

pub use json_file_store::JsonFileContentStore;

/// Read-only access to the product catalogue.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Every product in the catalogue, in catalogue order. No pagination.
    async fn list_all_products(&self) -> Result<Vec<ProductRecord>, ContentStoreError>;
}
