//! Utility functions for the product indexer repository.

use url::Url;

use crate::errors::SearchIndexError;

/// Port used when the endpoint does not name one.
pub const DEFAULT_PORT: u16 = 80;

/// Parse and validate a search cluster endpoint.
///
/// The endpoint is configured as `host[:port]`. A scheme is optional and
/// defaults to `http`; the port defaults to 80.
///
/// # Arguments
///
/// * `endpoint` - The endpoint as entered by the operator
///
/// # Returns
///
/// * `Ok(Url)` - The base URL of the cluster
/// * `Err(SearchIndexError)` - If the endpoint is blank or not a valid URL
///
/// # Example
///
/// ```
/// use product_indexer_repository::parse_endpoint_url;
///
/// let url = parse_endpoint_url("search.internal:9200").expect("valid endpoint");
/// assert_eq!(url.as_str(), "http://search.internal:9200/");
/// ```
pub fn parse_endpoint_url(endpoint: &str) -> Result<Url, SearchIndexError> {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        return Err(SearchIndexError::validation("endpoint is required"));
    }

    let with_scheme = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    };

    let mut url = Url::parse(&with_scheme)
        .map_err(|e| SearchIndexError::validation(format!("Invalid endpoint: {}", e)))?;

    if url.host_str().is_none() {
        return Err(SearchIndexError::validation(format!(
            "Invalid endpoint: no host in '{}'",
            endpoint
        )));
    }

    if url.port_or_known_default().is_none() {
        url.set_port(Some(DEFAULT_PORT))
            .map_err(|_| SearchIndexError::validation("Invalid endpoint: cannot set port"))?;
    }

    Ok(url)
}
