//! Context text handed to the answer synthesizer.

use campus_core::constants::CONTEXT_SEPARATOR;
use campus_core::models::ScoredMatch;

use crate::search::VectorHit;

/// `keyword: answer` for each selected match, blank-line separated.
pub fn lexical_context(selected: &[&ScoredMatch<'_>]) -> String {
    selected
        .iter()
        .map(|m| m.entry.context_line())
        .collect::<Vec<_>>()
        .join(CONTEXT_SEPARATOR)
}

/// The top hit's chunk text.
pub fn vector_context(hits: &[VectorHit<'_>]) -> String {
    hits.first().map(|h| h.entry.chunk_text()).unwrap_or_default()
}
