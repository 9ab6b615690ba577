//! Full-reindex synchronizer.
//!
//! A sync is a linear pipeline:
//!
//! ```text
//! connecting -> recreating index -> mapping -> fetching -> bulk-submitting -> done
//! ```
//!
//! The first failing stage aborts the sync. Nothing is retried, and the index
//! is always rebuilt from scratch, so two syncs over an unchanged catalogue
//! leave identical documents behind.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::SyncSettings;
use crate::content::ContentStore;
use crate::errors::{SyncError, SyncStage};
use crate::processor::ProductProcessor;
use product_indexer_repository::{
    BatchOperationSummary, IndexMapping, SearchIndexConnector, SearchIndexError,
};

/// Outcome of a successful sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub index_name: String,
    pub documents_indexed: usize,
}

/// Rebuilds the product index from the content store.
pub struct IndexSynchronizer {
    connector: Arc<dyn SearchIndexConnector>,
    store: Arc<dyn ContentStore>,
    processor: ProductProcessor,
    mapping: IndexMapping,
}

impl IndexSynchronizer {
    /// Create a synchronizer using the product mapping.
    pub fn new(connector: Arc<dyn SearchIndexConnector>, store: Arc<dyn ContentStore>) -> Self {
        Self {
            connector,
            store,
            processor: ProductProcessor::new(),
            mapping: IndexMapping::products(),
        }
    }

    /// Run a full reindex.
    ///
    /// # Arguments
    ///
    /// * `settings` - Endpoint and site settings read at the start of the sync
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReport)` - The index was rebuilt with every product
    /// * `Err(SyncError::ClientUnavailable)` - No endpoint; nothing was contacted
    /// * `Err(SyncError)` - The stage that failed and its cause
    #[instrument(skip(self, settings), fields(site_url = %settings.site_url))]
    pub async fn sync(&self, settings: &SyncSettings) -> Result<SyncReport, SyncError> {
        let endpoint = settings.endpoint_url()?;
        let index = settings.index_config()?;
        let index_name = index.name.clone();

        info!(stage = %SyncStage::Connecting, endpoint = %endpoint, index = %index_name, "Starting sync");
        let provider = self
            .connector
            .connect(&endpoint, index)
            .await
            .map_err(|e| SyncError::index_operation(SyncStage::Connecting, e))?;

        info!(stage = %SyncStage::RecreatingIndex, "Recreating index");
        provider
            .create_index(true)
            .await
            .map_err(|e| SyncError::index_operation(SyncStage::RecreatingIndex, e))?;

        info!(stage = %SyncStage::Mapping, "Applying mapping");
        provider
            .put_mapping(&self.mapping)
            .await
            .map_err(|e| SyncError::index_operation(SyncStage::Mapping, e))?;

        info!(stage = %SyncStage::Fetching, "Fetching products");
        let records = self.store.list_all_products().await?;
        let documents = self.processor.process_batch(&records);

        if documents.is_empty() {
            info!("Catalogue is empty, skipping bulk submit");
            return Ok(SyncReport {
                index_name,
                documents_indexed: 0,
            });
        }

        info!(stage = %SyncStage::BulkSubmitting, document_count = documents.len(), "Submitting documents");
        let summary = provider
            .bulk_index_documents(&documents)
            .await
            .map_err(|e| SyncError::index_operation(SyncStage::BulkSubmitting, e))?;

        if !summary.is_complete_success() {
            warn!(failed = summary.failed, total = summary.total, "Bulk submit rejected documents");
            return Err(SyncError::index_operation(
                SyncStage::BulkSubmitting,
                rejected_documents_error(&summary),
            ));
        }

        info!(documents_indexed = summary.succeeded, "Sync completed");
        Ok(SyncReport {
            index_name,
            documents_indexed: summary.succeeded,
        })
    }
}

/// Describe the documents a bulk request rejected.
fn rejected_documents_error(summary: &BatchOperationSummary) -> SearchIndexError {
    let first_error = summary
        .results
        .iter()
        .find_map(|result| result.error.as_ref())
        .map(|e| e.to_string())
        .unwrap_or_else(|| "unknown error".to_string());

    SearchIndexError::bulk_index(format!(
        "{} of {} documents rejected (ids: {}); first error: {}",
        summary.failed,
        summary.total,
        summary.failed_ids().join(", "),
        first_error
    ))
}
