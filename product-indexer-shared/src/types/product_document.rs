//! Product document types for the search index.
//!
//! This module defines the document structure that is indexed in the search engine.

use serde::{Deserialize, Serialize};

/// Source field names as they appear in the search index.
///
/// These names are part of the wire contract with existing indices and
/// must match the index mapping.
pub mod fields {
    pub const TITLE: &str = "post_title";
    pub const CONTENT: &str = "post_content";
    pub const EXCERPT: &str = "post_excerpt";
    pub const TAGS: &str = "post_tags";
    pub const CATEGORIES: &str = "post_category";

    /// All mapped fields, in mapping order.
    pub const ALL: [&str; 5] = [TITLE, CONTENT, EXCERPT, TAGS, CATEGORIES];
}

/// Document representation for the search index.
///
/// Built from a product record for a single sync and discarded afterwards.
/// The `id` is used as the document `_id` and is not part of the source body.
///
/// # Fields
///
/// - `id`: Mirrors the product record id
/// - `title`: Product title, copied verbatim
/// - `content`: Product body with all markup stripped
/// - `excerpt`: Excerpt with all markup stripped
/// - `tags`: Tag names in term order, absent when the product has no tags
/// - `categories`: Category names in term order, absent when the product has no categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductDocument {
    #[serde(skip)]
    pub id: u64,
    #[serde(rename = "post_title")]
    pub title: String,
    #[serde(rename = "post_content")]
    pub content: String,
    #[serde(rename = "post_excerpt")]
    pub excerpt: String,
    #[serde(
        rename = "post_tags",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub tags: Option<Vec<String>>,
    #[serde(
        rename = "post_category",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<Vec<String>>,
}

impl ProductDocument {
    /// Generate the document ID used in the search index.
    pub fn document_id(&self) -> String {
        self.id.to_string()
    }
}
