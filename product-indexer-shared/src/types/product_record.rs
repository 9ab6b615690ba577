//! Product record types.
//!
//! Records are owned by the content store and are read-only from the
//! indexer's point of view.

use serde::{Deserialize, Serialize};

/// A taxonomy term attached to a product (a tag or a category).
///
/// Only `name` is consumed when building search documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Term {
    pub id: u64,
    pub name: String,
}

impl Term {
    /// Create a new term.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A product as stored in the content store.
///
/// # Fields
///
/// - `id`: Identifier assigned by the content store, reused as the document id
/// - `title`: Plain product title
/// - `content`: Product body, may contain markup
/// - `excerpt`: Short description, may contain markup
/// - `tags`: Ordered tag terms, `None` when the product has no tags
/// - `categories`: Ordered category terms, `None` when the product has no categories
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Term>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Term>>,
}

impl ProductRecord {
    /// Create a new record without tags or categories.
    ///
    /// # Example
    ///
    /// ```
    /// use product_indexer_shared::{ProductRecord, Term};
    ///
    /// let record = ProductRecord::new(7, "Mug", "<p>Blue</p>", "<b>Nice</b>")
    ///     .with_tags(vec![Term::new(1, "ceramic")]);
    /// assert_eq!(record.tags.as_ref().map(Vec::len), Some(1));
    /// ```
    pub fn new(
        id: u64,
        title: impl Into<String>,
        content: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            excerpt: excerpt.into(),
            tags: None,
            categories: None,
        }
    }

    /// Attach tag terms.
    pub fn with_tags(mut self, tags: Vec<Term>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Attach category terms.
    pub fn with_categories(mut self, categories: Vec<Term>) -> Self {
        self.categories = Some(categories);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = ProductRecord::new(7, "Mug", "<p>Blue</p>", "")
            .with_tags(vec![Term::new(1, "ceramic")])
            .with_categories(vec![]);

        assert_eq!(record.id, 7);
        assert_eq!(record.title, "Mug");
        assert_eq!(record.tags, Some(vec![Term::new(1, "ceramic")]));
        assert_eq!(record.categories, Some(vec![]));
    }

    #[test]
    fn test_deserialize_without_terms() {
        let json = r#"{"id": 3, "title": "Cup", "content": "<p>Red</p>"}"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.excerpt, "");
        assert!(record.tags.is_none());
        assert!(record.categories.is_none());
    }

    #[test]
    fn test_deserialize_with_terms() {
        let json = r#"{
            "id": 9,
            "title": "Bowl",
            "content": "",
            "excerpt": "",
            "tags": [{"id": 1, "name": "glass"}, {"id": 2, "name": "blue"}],
            "categories": [{"id": 10, "name": "kitchen"}]
        }"#;
        let record: ProductRecord = serde_json::from_str(json).unwrap();

        let tags = record.tags.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "glass");
        assert_eq!(tags[1].name, "blue");
        assert_eq!(record.categories.unwrap()[0].name, "kitchen");
    }
}
