//! Result types for search index operations.

use crate::errors::SearchIndexError;

/// Result of a bulk operation for a single document.
///
/// This struct represents the outcome of one action within a bulk request.
/// It indicates whether the action succeeded and includes error details if it failed.
#[derive(Debug, Clone)]
pub struct BatchOperationResult {
    /// The document `_id` the action targeted.
    pub document_id: String,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Error if the operation failed.
    pub error: Option<SearchIndexError>,
}

/// Summary of a bulk operation containing aggregate statistics and individual results.
///
/// A bulk request is one round trip, but the backend reports each action
/// separately. Callers that need all-or-nothing semantics should treat
/// `failed > 0` as a failure of the whole batch.
#[derive(Debug, Clone, Default)]
pub struct BatchOperationSummary {
    /// Total number of items in the batch.
    pub total: usize,
    /// Number of successful operations.
    pub succeeded: usize,
    /// Number of failed operations.
    pub failed: usize,
    /// Individual results for each item.
    pub results: Vec<BatchOperationResult>,
}

impl BatchOperationSummary {
    /// An empty summary for a batch with no documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a summary from per-document results.
    pub fn from_results(results: Vec<BatchOperationResult>) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }

    /// Whether every action in the batch succeeded.
    pub fn is_complete_success(&self) -> bool {
        self.failed == 0
    }

    /// Ids of the documents whose action failed, in request order.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.success)
            .map(|r| r.document_id.as_str())
            .collect()
    }
}
