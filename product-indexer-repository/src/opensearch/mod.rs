//! OpenSearch implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! and `SearchIndexConnector` using OpenSearch as the backend, together with
//! the product index settings and mapping.

mod connector;
mod index_config;
mod provider;

pub use connector::OpenSearchConnector;
pub use index_config::{FieldMapping, IndexConfig, IndexMapping, JAPANESE_ANALYZER};
pub use provider::OpenSearchProvider;
