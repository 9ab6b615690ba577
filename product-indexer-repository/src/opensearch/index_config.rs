//! OpenSearch index configuration and mappings.
//!
//! This module defines the index settings and mappings for the product search index.

use serde_json::{json, Map, Value};

use product_indexer_shared::fields;

/// Analyzer applied to every product text field.
///
/// Provided by the `analysis-kuromoji` plugin. Documents indexed with a different
/// analyzer will not match queries analyzed with this one, so existing indices
/// depend on this exact name.
pub const JAPANESE_ANALYZER: &str = "kuromoji";

/// Configuration for the search index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// The index name (used for all operations).
    pub name: String,
    /// Number of primary shards set at creation.
    pub number_of_shards: u32,
    /// Number of replicas set at creation.
    pub number_of_replicas: u32,
}

impl IndexConfig {
    /// Create a new index configuration with 1 shard and 1 replica.
    ///
    /// # Arguments
    ///
    /// * `name` - The index name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number_of_shards: 1,
            number_of_replicas: 1,
        }
    }

    /// Override the shard and replica counts.
    pub fn with_shards(mut self, number_of_shards: u32, number_of_replicas: u32) -> Self {
        self.number_of_shards = number_of_shards;
        self.number_of_replicas = number_of_replicas;
        self
    }

    /// Body of the create-index request.
    ///
    /// Mappings are deliberately not part of it; they are applied in a separate
    /// step once the index exists.
    pub fn settings(&self) -> Value {
        json!({
            "settings": {
                "number_of_shards": self.number_of_shards,
                "number_of_replicas": self.number_of_replicas
            }
        })
    }
}

/// A single field specification in the index mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub name: String,
    pub field_type: String,
    pub analyzer: Option<String>,
}

impl FieldMapping {
    /// A full-text field analyzed with `analyzer`.
    pub fn text(name: impl Into<String>, analyzer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: "text".to_string(),
            analyzer: Some(analyzer.into()),
        }
    }

    fn to_json(&self) -> Value {
        let mut spec = Map::new();
        spec.insert("type".to_string(), json!(self.field_type));
        if let Some(ref analyzer) = self.analyzer {
            spec.insert("analyzer".to_string(), json!(analyzer));
        }
        Value::Object(spec)
    }
}

/// The set of field specifications applied to an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMapping {
    pub fields: Vec<FieldMapping>,
}

impl IndexMapping {
    /// The fixed product mapping.
    ///
    /// Five text fields (title, content, excerpt, tags, categories), each
    /// analyzed with the Japanese morphological analyzer.
    pub fn products() -> Self {
        Self {
            fields: fields::ALL
                .iter()
                .map(|name| FieldMapping::text(*name, JAPANESE_ANALYZER))
                .collect(),
        }
    }

    /// Body of the put-mapping request.
    pub fn to_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.to_json()))
            .collect();

        json!({ "properties": properties })
    }
}
