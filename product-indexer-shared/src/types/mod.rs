//! This module defines the core data structures used across the product indexer.
//! It re-exports `ProductRecord`, `Term` and `ProductDocument`.

pub mod product_document;
pub mod product_record;

pub use product_document::ProductDocument;
pub use product_record::{ProductRecord, Term};
