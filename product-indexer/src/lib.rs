//! # Product Indexer
//!
//! Rebuilds a product search index from the content store catalogue.
//!
//! ## Architecture
//!
//! Every sync is a full reindex:
//!
//! 1. **Trigger**: Decides whether an event runs a sync
//! 2. **Synchronizer**: Recreates the index, applies the mapping, fetches all products
//! 3. **Processor**: Maps product records into search documents
//! 4. **Repository**: Submits the documents in one bulk request
//!
//! ## Modules
//!
//! - [`config`]: Settings and dependency initialization
//! - [`content`]: Content store access
//! - [`processor`]: Markup stripping, term flattening and document mapping
//! - [`synchronizer`]: The sync pipeline
//! - [`trigger`]: Event handling
//! - [`errors`]: Error types for the indexer

pub mod config;
pub mod content;
pub mod errors;
pub mod processor;
pub mod synchronizer;
pub mod trigger;

pub use config::{Dependencies, SyncSettings};
pub use errors::{ContentStoreError, SyncError, SyncStage};
pub use synchronizer::{IndexSynchronizer, SyncReport};
pub use trigger::{SkipReason, SyncEvent, SyncOutcome, SyncTrigger};

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Sync error.
    #[error("Sync error: {0}")]
    SyncError(#[from] SyncError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
