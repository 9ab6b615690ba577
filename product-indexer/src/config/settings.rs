//! Settings consumed by a sync.

use url::Url;

use crate::errors::{SyncError, SyncStage};
use product_indexer_repository::{parse_endpoint_url, IndexConfig};

/// Settings for a full reindex.
///
/// The endpoint is operator-editable at runtime; the site URL is fixed for the
/// lifetime of the process and names the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    /// Search cluster endpoint as `host[:port]`. `None` or blank disables syncing.
    pub endpoint: Option<String>,
    /// Canonical site URL.
    pub site_url: String,
    pub number_of_shards: u32,
    pub number_of_replicas: u32,
}

impl SyncSettings {
    /// Create settings with 1 shard and 1 replica.
    pub fn new(endpoint: Option<String>, site_url: impl Into<String>) -> Self {
        Self {
            endpoint,
            site_url: site_url.into(),
            number_of_shards: 1,
            number_of_replicas: 1,
        }
    }

    /// Override the shard and replica counts used when the index is created.
    pub fn with_shards(mut self, number_of_shards: u32, number_of_replicas: u32) -> Self {
        self.number_of_shards = number_of_shards;
        self.number_of_replicas = number_of_replicas;
        self
    }

    /// Whether a non-blank endpoint is configured.
    pub fn has_endpoint(&self) -> bool {
        self.configured_endpoint().is_some()
    }

    /// Replace the stored endpoint.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = Some(endpoint.into());
    }

    /// The index name: the host of the site URL.
    ///
    /// # Example
    ///
    /// ```
    /// use product_indexer::config::SyncSettings;
    ///
    /// let settings = SyncSettings::new(None, "https://shop.example.com/store/");
    /// assert_eq!(settings.index_name().unwrap(), "shop.example.com");
    /// ```
    pub fn index_name(&self) -> Result<String, SyncError> {
        let url = Url::parse(self.site_url.trim())
            .map_err(|e| SyncError::invalid_site_url(&self.site_url, e.to_string()))?;

        url.host_str()
            .map(str::to_string)
            .ok_or_else(|| SyncError::invalid_site_url(&self.site_url, "no host"))
    }

    /// The base URL of the search cluster.
    ///
    /// # Returns
    ///
    /// * `Ok(Url)` - The cluster URL
    /// * `Err(SyncError::ClientUnavailable)` - If no endpoint is configured
    /// * `Err(SyncError::IndexOperationFailed)` - If the endpoint cannot be parsed
    pub fn endpoint_url(&self) -> Result<Url, SyncError> {
        let endpoint = self
            .configured_endpoint()
            .ok_or(SyncError::ClientUnavailable)?;

        parse_endpoint_url(endpoint)
            .map_err(|e| SyncError::index_operation(SyncStage::Connecting, e))
    }

    /// Index configuration for this site.
    pub fn index_config(&self) -> Result<IndexConfig, SyncError> {
        Ok(IndexConfig::new(self.index_name()?)
            .with_shards(self.number_of_shards, self.number_of_replicas))
    }

    fn configured_endpoint(&self) -> Option<&str> {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|endpoint| !endpoint.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_name_is_site_host() {
        let settings = SyncSettings::new(None, "http://shop.example.com");
        assert_eq!(settings.index_name().unwrap(), "shop.example.com");
    }

    #[test]
    fn test_index_name_ignores_port_path_and_case() {
        let settings = SyncSettings::new(None, "https://Shop.Example.com:8443/jp/?lang=ja");
        assert_eq!(settings.index_name().unwrap(), "shop.example.com");
    }

    #[test]
    fn test_index_name_is_stable() {
        let settings = SyncSettings::new(None, "http://shop.example.com");
        assert_eq!(settings.index_name().unwrap(), settings.index_name().unwrap());
    }

    #[test]
    fn test_invalid_site_url() {
        let settings = SyncSettings::new(None, "not a url");
        assert!(matches!(
            settings.index_name().unwrap_err(),
            SyncError::InvalidSiteUrl { .. }
        ));
    }

    #[test]
    fn test_missing_endpoint_is_client_unavailable() {
        for endpoint in [None, Some(String::new()), Some("   ".to_string())] {
            let settings = SyncSettings::new(endpoint, "http://shop.example.com");
            assert!(!settings.has_endpoint());
            assert!(matches!(
                settings.endpoint_url().unwrap_err(),
                SyncError::ClientUnavailable
            ));
        }
    }

    #[test]
    fn test_endpoint_url_defaults() {
        let settings = SyncSettings::new(Some("es.internal".to_string()), "http://shop.example.com");
        let url = settings.endpoint_url().unwrap();

        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("es.internal"));
        assert_eq!(url.port_or_known_default(), Some(80));
    }

    #[test]
    fn test_endpoint_url_with_port() {
        let settings =
            SyncSettings::new(Some("es.internal:9200".to_string()), "http://shop.example.com");
        assert_eq!(settings.endpoint_url().unwrap().port(), Some(9200));
    }

    #[test]
    fn test_set_endpoint_replaces_value() {
        let mut settings = SyncSettings::new(None, "http://shop.example.com");
        settings.set_endpoint("es.internal:9200");

        assert!(settings.has_endpoint());
        assert_eq!(settings.endpoint.as_deref(), Some("es.internal:9200"));
    }

    #[test]
    fn test_index_config_carries_shards() {
        let settings = SyncSettings::new(None, "http://shop.example.com").with_shards(2, 0);
        let config = settings.index_config().unwrap();

        assert_eq!(config.name, "shop.example.com");
        assert_eq!(config.number_of_shards, 2);
        assert_eq!(config.number_of_replicas, 0);
    }
}
