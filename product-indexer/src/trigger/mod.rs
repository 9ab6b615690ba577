//! Trigger adapter.
//!
//! Turns content events into full syncs. Both events rebuild the whole index;
//! a product save never updates a single document. Overlapping syncs are not
//! serialized, so the last one to finish wins.

use tracing::{debug, info, instrument};

use crate::config::SyncSettings;
use crate::errors::SyncError;
use crate::synchronizer::{IndexSynchronizer, SyncReport};

/// Post type whose saves trigger a sync.
pub const PRODUCT_POST_TYPE: &str = "product";

/// An event that may trigger a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// The operator saved settings. `endpoint` is the posted value.
    SettingsSaved { endpoint: Option<String> },
    /// A content record was saved.
    ProductSaved { product_id: u64, post_type: String },
}

impl SyncEvent {
    fn kind(&self) -> &'static str {
        match self {
            Self::SettingsSaved { .. } => "settings_saved",
            Self::ProductSaved { .. } => "product_saved",
        }
    }
}

/// Why an event did not run a sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Settings were saved without an endpoint.
    EmptyEndpoint,
    /// The saved record is not a product.
    NotAProduct { post_type: String },
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Synced(SyncReport),
    Skipped(SkipReason),
}

/// Dispatches events to the synchronizer and owns the current settings.
pub struct SyncTrigger {
    synchronizer: IndexSynchronizer,
    settings: SyncSettings,
}

impl SyncTrigger {
    pub fn new(synchronizer: IndexSynchronizer, settings: SyncSettings) -> Self {
        Self {
            synchronizer,
            settings,
        }
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// Handle a single event.
    ///
    /// Failures are returned to the caller, which decides whether they are
    /// fatal to its request. A failed sync does not roll back a settings change.
    #[instrument(skip(self, event), fields(event = event.kind()))]
    pub async fn handle(&mut self, event: SyncEvent) -> Result<SyncOutcome, SyncError> {
        match event {
            SyncEvent::SettingsSaved { endpoint } => {
                let endpoint = match endpoint {
                    Some(endpoint) if !endpoint.trim().is_empty() => endpoint,
                    _ => {
                        debug!("Settings saved without an endpoint, skipping sync");
                        return Ok(SyncOutcome::Skipped(SkipReason::EmptyEndpoint));
                    }
                };

                info!(endpoint = %endpoint, "Search endpoint updated");
                self.settings.set_endpoint(endpoint);
            }
            SyncEvent::ProductSaved {
                product_id,
                post_type,
            } => {
                if post_type != PRODUCT_POST_TYPE {
                    debug!(post_type = %post_type, "Saved record is not a product, skipping sync");
                    return Ok(SyncOutcome::Skipped(SkipReason::NotAProduct { post_type }));
                }

                info!(product_id, "Product saved, running full sync");
            }
        }

        self.sync_now().await.map(SyncOutcome::Synced)
    }

    /// Run a full sync with the current settings.
    pub async fn sync_now(&self) -> Result<SyncReport, SyncError> {
        self.synchronizer.sync(&self.settings).await
    }
}
