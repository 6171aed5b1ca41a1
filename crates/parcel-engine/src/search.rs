//! Query matching against the tax-lot index

use parcel_types::{PropertyFeature, SearchQuery};

use crate::index::PropertyIndex;
use crate::patterns::query_pattern;

/// Filter the index by a query, preserving index order. An incomplete query
/// yields nothing — no partial filtering. A complete query compiles to a
/// single pattern applied to every feature's legal description.
pub fn match_features<'a>(
    index: &'a PropertyIndex,
    query: &SearchQuery,
) -> Vec<&'a PropertyFeature> {
    let pattern = match query_pattern(query) {
        Some(pattern) => pattern,
        None => return Vec::new(),
    };
    let matches: Vec<_> = index
        .iter()
        .filter(|feature| pattern.is_match(&feature.legal_desc))
        .collect();
    tracing::debug!("Query matched {} of {} features", matches.len(), index.len());
    matches
}
