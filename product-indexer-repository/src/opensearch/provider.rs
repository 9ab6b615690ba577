//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::{
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesPutMappingParts},
    BulkParts, OpenSearch,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::index_config::{IndexConfig, IndexMapping};
use crate::types::{BatchOperationResult, BatchOperationSummary};
use product_indexer_shared::ProductDocument;

/// OpenSearch provider implementation.
///
/// Bound to a single index. Speaks the index, mapping and bulk APIs shared by
/// OpenSearch and Elasticsearch.
///
/// # Example
///
/// ```ignore
/// use product_indexer_repository::opensearch::{IndexConfig, IndexMapping};
/// let url = Url::parse("http://localhost:9200")?;
/// let provider = OpenSearchProvider::new(&url, IndexConfig::new("shop.example.com"))?;
///
/// provider.create_index(true).await?;
/// provider.put_mapping(&IndexMapping::products()).await?;
/// let summary = provider.bulk_index_documents(&documents).await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
    index_config: IndexConfig,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider for the cluster at `url`.
    ///
    /// # Arguments
    ///
    /// * `url` - The cluster base URL (e.g., "http://localhost:9200")
    /// * `index_config` - The index this provider operates on
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If transport setup fails
    pub fn new(url: &Url, index_config: IndexConfig) -> Result<Self, SearchIndexError> {
        let conn_pool = SingleNodeConnectionPool::new(url.clone());
        let transport = TransportBuilder::new(conn_pool)
            .disable_proxy()
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            index = %index_config.name,
            "Created OpenSearch provider"
        );

        Ok(Self {
            client,
            index_config,
        })
    }

    /// Delete the index, treating a missing index as success.
    async fn delete_index(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[self.index_config.name.as_str()]))
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();

        // 404 is acceptable - index may not exist yet
        if !status.is_success() && status.as_u16() != 404 {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Delete index request failed");
            return Err(SearchIndexError::index_creation(format!(
                "Delete index failed with status {}: {}",
                status, error_body
            )));
        }

        debug!(index = %self.index_config.name, existed = status.is_success(), "Index deleted");
        Ok(())
    }

    /// Build the NDJSON body of a bulk request: one `index` action line
    /// followed by one source line per document.
    fn build_bulk_body(
        index_name: &str,
        documents: &[ProductDocument],
    ) -> Result<Vec<JsonBody<Value>>, SearchIndexError> {
        let mut body: Vec<JsonBody<Value>> = Vec::with_capacity(documents.len() * 2);

        for doc in documents {
            body.push(json!({"index": {"_index": index_name, "_id": doc.document_id()}}).into());
            let source = serde_json::to_value(doc).map_err(|e| {
                SearchIndexError::serialization(format!(
                    "Failed to serialize document {}: {}",
                    doc.id, e
                ))
            })?;
            body.push(source.into());
        }

        Ok(body)
    }

    /// Turn a bulk response body into a per-document summary.
    fn parse_bulk_response(
        response_body: &Value,
        documents: &[ProductDocument],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        let has_errors = response_body
            .get("errors")
            .and_then(Value::as_bool)
            .ok_or_else(|| SearchIndexError::parse("Bulk response has no 'errors' flag"))?;

        let items = match response_body.get("items").and_then(Value::as_array) {
            Some(items) => items,
            None if !has_errors => {
                let results = documents
                    .iter()
                    .map(|doc| BatchOperationResult {
                        document_id: doc.document_id(),
                        success: true,
                        error: None,
                    })
                    .collect();
                return Ok(BatchOperationSummary::from_results(results));
            }
            None => {
                return Err(SearchIndexError::parse(
                    "Bulk response reported errors without items",
                ))
            }
        };

        let results = items
            .iter()
            .map(|item| {
                // Each item is keyed by its action name ("index").
                let action = item.as_object().and_then(|obj| obj.values().next());

                let document_id = action
                    .and_then(|a| a.get("_id"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();

                match action.and_then(|a| a.get("error")) {
                    Some(err) => {
                        let reason = format!(
                            "{}: {}",
                            err.get("type").and_then(Value::as_str).unwrap_or("unknown"),
                            err.get("reason").and_then(Value::as_str).unwrap_or_default()
                        );
                        BatchOperationResult {
                            document_id,
                            success: false,
                            error: Some(SearchIndexError::bulk_index(reason)),
                        }
                    }
                    None => BatchOperationResult {
                        document_id,
                        success: true,
                        error: None,
                    },
                }
            })
            .collect();

        Ok(BatchOperationSummary::from_results(results))
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    fn index(&self) -> &IndexConfig {
        &self.index_config
    }

    /// Create the index with its shard settings.
    ///
    /// With `recreate`, the index is deleted first so the new one starts empty.
    #[instrument(skip(self), fields(index = %self.index_config.name))]
    async fn create_index(&self, recreate: bool) -> Result<(), SearchIndexError> {
        if recreate {
            self.delete_index().await?;
        }

        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(&self.index_config.name))
            .body(self.index_config.settings())
            .send()
            .await
            .map_err(|e| SearchIndexError::index_creation(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Create index request failed");
            return Err(SearchIndexError::index_creation(format!(
                "Create index failed with status {}: {}",
                status, error_body
            )));
        }

        info!("Index created");
        Ok(())
    }

    #[instrument(skip(self, mapping), fields(index = %self.index_config.name, fields = mapping.fields.len()))]
    async fn put_mapping(&self, mapping: &IndexMapping) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .indices()
            .put_mapping(IndicesPutMappingParts::Index(&[self.index_config.name.as_str()]))
            .body(mapping.to_json())
            .send()
            .await
            .map_err(|e| SearchIndexError::mapping(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Put mapping request failed");
            return Err(SearchIndexError::mapping(format!(
                "Put mapping failed with status {}: {}",
                status, error_body
            )));
        }

        info!("Mapping applied");
        Ok(())
    }

    #[instrument(skip(self, documents), fields(index = %self.index_config.name, document_count = documents.len()))]
    async fn bulk_index_documents(
        &self,
        documents: &[ProductDocument],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        if documents.is_empty() {
            return Ok(BatchOperationSummary::empty());
        }

        let body = Self::build_bulk_body(&self.index_config.name, documents)?;

        let response = self
            .client
            .bulk(BulkParts::Index(&self.index_config.name))
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchIndexError::bulk_index(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let summary = Self::parse_bulk_response(&response_body, documents)?;

        if summary.failed > 0 {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "Bulk request reported item failures"
            );
        } else {
            debug!(succeeded = summary.succeeded, "Bulk request completed");
        }

        Ok(summary)
    }
}
