//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::opensearch::{IndexConfig, IndexMapping};
use crate::types::BatchOperationSummary;
use product_indexer_shared::ProductDocument;

/// Abstracts the underlying search index implementation (OpenSearch, Elasticsearch, etc.).
///
/// A provider is bound to a single index, named by its `IndexConfig`. Providers are
/// produced by a `SearchIndexConnector` and injected into the synchronizer, which
/// enables easy testing with mock implementations.
///
/// All methods return `Result<T, SearchIndexError>` for consistent error handling across
/// different backend implementations.
///
/// # Ordering
///
/// The mapping must be applied after the index is created and before any document is
/// written, otherwise the backend infers field types and analyzers on its own.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// The index this provider operates on.
    fn index(&self) -> &IndexConfig;

    /// Create the index.
    ///
    /// # Arguments
    ///
    /// * `recreate` - When `true`, an existing index with the same name is deleted first,
    ///   leaving a new empty index. When `false`, an existing index is an error.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the index was created
    /// * `Err(SearchIndexError::IndexCreationError)` - If deletion or creation fails
    async fn create_index(&self, recreate: bool) -> Result<(), SearchIndexError>;

    /// Apply a field mapping to the index.
    ///
    /// # Arguments
    ///
    /// * `mapping` - The field specifications to apply
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the mapping was accepted
    /// * `Err(SearchIndexError::MappingError)` - If the backend rejects the mapping
    async fn put_mapping(&self, mapping: &IndexMapping) -> Result<(), SearchIndexError>;

    /// Index all documents in a single bulk request.
    ///
    /// Documents with an existing `_id` are replaced.
    ///
    /// # Arguments
    ///
    /// * `documents` - Slice of product documents to index
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Per-document outcome as reported by the backend
    /// * `Err(SearchIndexError)` - If the request could not be sent or was rejected entirely
    async fn bulk_index_documents(
        &self,
        documents: &[ProductDocument],
    ) -> Result<BatchOperationSummary, SearchIndexError>;
}
