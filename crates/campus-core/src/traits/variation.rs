/// Decides whether a query is a linguistic variant of a catalogued keyword.
///
/// The relevance scorer only depends on this contract, so the rule-based
/// matcher can be swapped for an embedding-based one.
pub trait IVariationStrategy: Send + Sync {
    fn is_variation_of(&self, query: &str, keyword: &str) -> bool;

    /// Ranking score in [0, 100].
    fn variation_score(&self, query: &str, keyword: &str) -> u32;

    fn name(&self) -> &str;
}
