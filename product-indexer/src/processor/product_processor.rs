//! Product processor implementation.
//!
//! Maps product records from the content store into search documents.

use tracing::{debug, instrument};

use crate::processor::markup::strip_all_tags;
use crate::processor::terms::flatten_terms;
use product_indexer_shared::{ProductDocument, ProductRecord};

/// Processor that transforms product records into search documents.
///
/// Mapping is pure: the title is copied as-is, content and excerpt lose all
/// markup, and term lists are flattened to their names.
pub struct ProductProcessor {}

impl ProductProcessor {
    /// Create a new product processor.
    pub fn new() -> Self {
        Self {}
    }

    /// Map a single record to its search document.
    ///
    /// # Example
    ///
    /// ```
    /// use product_indexer::processor::ProductProcessor;
    /// use product_indexer_shared::{ProductRecord, Term};
    ///
    /// let record = ProductRecord::new(7, "Mug", "<p>Blue</p>", "<b>Nice</b>")
    ///     .with_tags(vec![Term::new(1, "ceramic")]);
    /// let doc = ProductProcessor::new().to_document(&record);
    ///
    /// assert_eq!(doc.content, "Blue");
    /// assert_eq!(doc.tags, Some(vec!["ceramic".to_string()]));
    /// assert_eq!(doc.categories, None);
    /// ```
    pub fn to_document(&self, record: &ProductRecord) -> ProductDocument {
        ProductDocument {
            id: record.id,
            title: record.title.clone(),
            content: strip_all_tags(&record.content),
            excerpt: strip_all_tags(&record.excerpt),
            tags: flatten_terms(record.tags.as_deref()),
            categories: flatten_terms(record.categories.as_deref()),
        }
    }

    /// Process a batch of product records.
    ///
    /// # Arguments
    ///
    /// * `records` - The records to map, in catalogue order
    ///
    /// # Returns
    ///
    /// One document per record, in the same order.
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub fn process_batch(&self, records: &[ProductRecord]) -> Vec<ProductDocument> {
        let documents: Vec<ProductDocument> =
            records.iter().map(|record| self.to_document(record)).collect();

        debug!(document_count = documents.len(), "Processed product batch");
        documents
    }
}

impl Default for ProductProcessor {
    fn default() -> Self {
        Self::new()
    }
}
