//! Regex construction shared by the compiled catalogs.

use campus_core::errors::CatalogError;
use regex::{Regex, RegexBuilder};

/// `\bterm\b`, with `term` escaped.
pub fn whole_word(rule: &str, term: &str) -> Result<Regex, CatalogError> {
    build(rule, &format!(r"\b{}\b", regex::escape(term)))
}

/// `term` bounded by whitespace or the string edges.
pub fn standalone(rule: &str, term: &str) -> Result<Regex, CatalogError> {
    build(rule, &format!(r"(?:^|\s){}(?:\s|$)", regex::escape(term)))
}

/// A catalog-authored pattern, compiled case-insensitively.
pub fn pattern(rule: &str, source: &str) -> Result<Regex, CatalogError> {
    build(rule, source)
}

fn build(rule: &str, source: &str) -> Result<Regex, CatalogError> {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .build()
        .map_err(|e| CatalogError::InvalidPattern {
            rule: rule.to_string(),
            reason: e.to_string(),
        })
}
