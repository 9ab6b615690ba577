//! # Product Indexer Repository
//!
//! This crate provides traits and implementations for interacting with the
//! search index. It includes definitions for errors, interfaces, the product
//! index mapping, and a concrete implementation for OpenSearch (which speaks
//! the Elasticsearch index, mapping and bulk APIs).

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;
pub mod utils;

pub use errors::SearchIndexError;
pub use interfaces::{SearchIndexConnector, SearchIndexProvider};
pub use opensearch::{IndexConfig, IndexMapping, OpenSearchConnector, OpenSearchProvider};
pub use types::{BatchOperationResult, BatchOperationSummary};
pub use utils::parse_endpoint_url;
