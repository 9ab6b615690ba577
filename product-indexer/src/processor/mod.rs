//! Processor module for the product indexer.
//!
//! Transforms product records into search documents.

mod markup;
mod product_processor;
mod terms;

pub use markup::strip_all_tags;
pub use product_processor::ProductProcessor;
pub use terms::flatten_terms;
