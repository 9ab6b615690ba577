//! Dependency initialization and wiring for the product indexer.

use std::env;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::SyncSettings;
use crate::content::JsonFileContentStore;
use crate::synchronizer::IndexSynchronizer;
use crate::trigger::SyncTrigger;
use crate::IndexingError;
use product_indexer_repository::OpenSearchConnector;

/// Default catalogue file.
const DEFAULT_PRODUCTS_PATH: &str = "products.json";

/// Default number of primary shards.
const DEFAULT_INDEX_SHARDS: u32 = 1;

/// Default number of replicas.
const DEFAULT_INDEX_REPLICAS: u32 = 1;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The trigger, holding the synchronizer and the current settings.
    pub trigger: SyncTrigger,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SEARCH_ENDPOINT`: Search cluster as `host[:port]` (unset disables syncing)
    /// - `SITE_URL`: Canonical site URL, its host names the index (required)
    /// - `PRODUCTS_PATH`: JSON catalogue file (default: products.json)
    /// - `INDEX_SHARDS`: Primary shards at index creation (default: 1)
    /// - `INDEX_REPLICAS`: Replicas at index creation (default: 1)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If required configuration is missing or invalid
    pub fn from_env() -> Result<Self, IndexingError> {
        let endpoint = env::var("SEARCH_ENDPOINT").ok();
        let site_url = env::var("SITE_URL")
            .map_err(|_| IndexingError::config("SITE_URL environment variable is required"))?;
        let products_path =
            env::var("PRODUCTS_PATH").unwrap_or_else(|_| DEFAULT_PRODUCTS_PATH.to_string());
        let shards = parse_count("INDEX_SHARDS", DEFAULT_INDEX_SHARDS);
        let replicas = parse_count("INDEX_REPLICAS", DEFAULT_INDEX_REPLICAS);

        let settings = SyncSettings::new(endpoint, site_url).with_shards(shards, replicas);

        // Fail at startup rather than on the first event.
        let index_name = settings
            .index_name()
            .map_err(|e| IndexingError::config(e.to_string()))?;

        if !settings.has_endpoint() {
            warn!("SEARCH_ENDPOINT is not set, syncs will report the client as unavailable");
        }

        info!(
            endpoint = settings.endpoint.as_deref().unwrap_or_default(),
            index_name = %index_name,
            products_path = %products_path,
            shards,
            replicas,
            "Initializing dependencies"
        );

        let store = JsonFileContentStore::new(products_path);
        let synchronizer =
            IndexSynchronizer::new(Arc::new(OpenSearchConnector::new()), Arc::new(store));
        let trigger = SyncTrigger::new(synchronizer, settings);

        Ok(Self { trigger })
    }
}

/// Read a count from the environment, falling back to `default` when unset or invalid.
fn parse_count(var: &str, default: u32) -> u32 {
    match env::var(var) {
        Ok(value) => value.trim().parse::<u32>().unwrap_or_else(|_| {
            warn!(var, value = %value, default, "Invalid count, using default");
            default
        }),
        Err(_) => default,
    }
}
