//! Error types for the product indexer.

use std::fmt;

use product_indexer_repository::SearchIndexError;
use thiserror::Error;

/// Pipeline stage a sync was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStage {
    Connecting,
    RecreatingIndex,
    Mapping,
    Fetching,
    BulkSubmitting,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connecting => "connecting",
            Self::RecreatingIndex => "recreating index",
            Self::Mapping => "mapping",
            Self::Fetching => "fetching",
            Self::BulkSubmitting => "bulk-submitting",
        };
        f.write_str(name)
    }
}

/// Errors that abort a sync.
///
/// Every variant is terminal for the sync that produced it; nothing is
/// retried and later stages never run.
#[derive(Error, Debug)]
pub enum SyncError {
    /// No search endpoint is configured.
    #[error("Search client unavailable: no endpoint configured")]
    ClientUnavailable,

    /// The site URL has no usable host to name the index after.
    #[error("Invalid site URL '{url}': {reason}")]
    InvalidSiteUrl { url: String, reason: String },

    /// A search index operation failed.
    #[error("Index operation failed while {stage}: {source}")]
    IndexOperationFailed {
        stage: SyncStage,
        source: SearchIndexError,
    },

    /// The product catalogue could not be read.
    #[error("Content store failed: {0}")]
    ContentStoreFailed(#[from] ContentStoreError),
}

impl SyncError {
    /// Wrap a search index error with the stage it happened in.
    pub fn index_operation(stage: SyncStage, source: SearchIndexError) -> Self {
        Self::IndexOperationFailed { stage, source }
    }

    /// Create an invalid site URL error.
    pub fn invalid_site_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSiteUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// The stage a sync failed in, if it got as far as the index pipeline.
    pub fn stage(&self) -> Option<SyncStage> {
        match self {
            Self::IndexOperationFailed { stage, .. } => Some(*stage),
            Self::ContentStoreFailed(_) => Some(SyncStage::Fetching),
            Self::ClientUnavailable | Self::InvalidSiteUrl { .. } => None,
        }
    }
}

/// Errors from reading the product catalogue.
#[derive(Error, Debug)]
pub enum ContentStoreError {
    /// The catalogue could not be read.
    #[error("IO error: {0}")]
    IoError(String),

    /// The catalogue could not be decoded.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl ContentStoreError {
    /// Create an IO error.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::IoError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_operation_message_carries_cause() {
        let error = SyncError::index_operation(
            SyncStage::BulkSubmitting,
            SearchIndexError::bulk_index("timeout"),
        );

        let message = error.to_string();
        assert!(message.contains("bulk-submitting"));
        assert!(message.contains("timeout"));
        assert_eq!(error.stage(), Some(SyncStage::BulkSubmitting));
    }

    #[test]
    fn test_content_store_failure_is_fetching_stage() {
        let error: SyncError = ContentStoreError::io("products.json: not found").into();

        assert_eq!(error.stage(), Some(SyncStage::Fetching));
        assert!(error.to_string().contains("products.json"));
    }

    #[test]
    fn test_client_unavailable_has_no_stage() {
        assert_eq!(SyncError::ClientUnavailable.stage(), None);
    }
}
