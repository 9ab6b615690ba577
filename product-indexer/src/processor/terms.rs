//! Taxonomy term flattening.

use product_indexer_shared::Term;

/// Flatten a term list into its display names.
///
/// Returns `None` when `terms` is absent or empty so the document field is
/// omitted instead of being sent as an empty list. Order is preserved and
/// duplicates are kept.
pub fn flatten_terms(terms: Option<&[Term]>) -> Option<Vec<String>> {
    match terms {
        Some(terms) if !terms.is_empty() => {
            Some(terms.iter().map(|term| term.name.clone()).collect())
        }
        _ => None,
    }
}
