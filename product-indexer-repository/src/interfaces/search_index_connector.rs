//! Search index connector trait definition.
//!
//! Client construction is its own seam so that a fresh client can be built
//! from the endpoint configured at the time of each sync.

use async_trait::async_trait;
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::IndexConfig;

/// Builds `SearchIndexProvider`s for a given cluster endpoint and index.
#[async_trait]
pub trait SearchIndexConnector: Send + Sync {
    /// Construct a provider bound to `index` on the cluster at `endpoint`.
    ///
    /// Construction does not contact the cluster; connection failures surface
    /// from the first index operation.
    ///
    /// # Returns
    ///
    /// * `Ok(Box<dyn SearchIndexProvider>)` - A provider ready for use
    /// * `Err(SearchIndexError::ConnectionError)` - If the client cannot be built
    async fn connect(
        &self,
        endpoint: &Url,
        index: IndexConfig,
    ) -> Result<Box<dyn SearchIndexProvider>, SearchIndexError>;
}
