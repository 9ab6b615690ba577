//! OpenSearch connector implementation.

use async_trait::async_trait;
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::{SearchIndexConnector, SearchIndexProvider};
use crate::opensearch::{IndexConfig, OpenSearchProvider};

/// Builds an `OpenSearchProvider` per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSearchConnector;

impl OpenSearchConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SearchIndexConnector for OpenSearchConnector {
    async fn connect(
        &self,
        endpoint: &Url,
        index: IndexConfig,
    ) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError> {
        let provider = OpenSearchProvider::new(endpoint, index)?;
        Ok(Box::new(provider))
    }
}
