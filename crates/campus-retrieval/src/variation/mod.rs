//! Variation matching: is a query a paraphrase of a catalogued keyword?
//!
//! Two `IVariationStrategy` implementations: the rule-based matcher driven by
//! the variation tables, and an embedding-based matcher.

mod embedding;
mod rule_based;

pub use embedding::EmbeddingVariation;
pub use rule_based::RuleBasedVariation;
