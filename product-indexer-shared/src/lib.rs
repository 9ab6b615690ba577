//! # Product Indexer Shared
//!
//! This crate defines shared data structures used across the product indexer.
//! It includes the product records read from the content store and the
//! documents that are sent to the search index.

pub mod types;

pub use types::product_document::{fields, ProductDocument};
pub use types::product_record::{ProductRecord, Term};
