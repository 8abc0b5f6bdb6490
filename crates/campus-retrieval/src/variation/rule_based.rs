//! Rule-based variation matcher.
//!
//! Checks, in order: bidirectional substring containment, the base-word
//! variation table (both directions), compound rules, and question-shape
//! patterns. Every table is compiled once; matching is read-only.

use campus_core::catalog::{CompoundRule, VariationRules};
use campus_core::constants::{
    MAX_VARIATION_SCORE, VARIATION_HIT, VARIATION_IMPORTANT_WORD, VARIATION_TOKEN_OVERLAP,
};
use campus_core::errors::{CampusResult, CatalogError};
use campus_core::traits::IVariationStrategy;
use regex::Regex;

use crate::matching;
use crate::normalize::normalize_text;

struct CompiledBase {
    base: String,
    /// Variation phrase with its whole-word matcher.
    variations: Vec<(String, Regex)>,
}

struct CompiledQuestionRule {
    keyword: String,
    patterns: Vec<Regex>,
}

pub struct RuleBasedVariation {
    bases: Vec<CompiledBase>,
    compounds: Vec<CompoundRule>,
    questions: Vec<CompiledQuestionRule>,
    ranking_words: Vec<String>,
}

impl RuleBasedVariation {
    pub fn new(rules: &VariationRules) -> CampusResult<Self> {
        let mut bases = Vec::with_capacity(rules.base_variations.len());
        for entry in &rules.base_variations {
            let base = entry.base.to_lowercase();
            let mut variations = Vec::with_capacity(entry.variations.len());
            for v in &entry.variations {
                let v = v.to_lowercase();
                let re = matching::whole_word(&base, &v)?;
                variations.push((v, re));
            }
            bases.push(CompiledBase { base, variations });
        }

        let mut questions = Vec::with_capacity(rules.question_patterns.len());
        for rule in &rules.question_patterns {
            let patterns = rule
                .patterns
                .iter()
                .map(|p| matching::pattern(&rule.keyword, p))
                .collect::<Result<Vec<_>, CatalogError>>()?;
            questions.push(CompiledQuestionRule {
                keyword: rule.keyword.to_lowercase(),
                patterns,
            });
        }

        Ok(Self {
            bases,
            compounds: rules
                .compound_rules
                .iter()
                .map(|r| CompoundRule {
                    name: r.name.clone(),
                    query_groups: r
                        .query_groups
                        .iter()
                        .map(|g| g.iter().map(|t| t.to_lowercase()).collect())
                        .collect(),
                    keyword_terms: r.keyword_terms.iter().map(|t| t.to_lowercase()).collect(),
                })
                .collect(),
            questions,
            ranking_words: rules.ranking_words.iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    /// Base-word table lookup on normalized inputs.
    ///
    /// Forward: the keyword contains a base word and the query contains one
    /// of its variations. Reverse: the query contains the base word and the
    /// keyword contains a variation.
    pub fn matches_table(&self, query: &str, keyword: &str) -> bool {
        self.bases.iter().any(|b| {
            let forward = keyword.contains(&b.base)
                && b.variations.iter().any(|(_, re)| re.is_match(query));
            let reverse = query.contains(&b.base)
                && b.variations.iter().any(|(_, re)| re.is_match(keyword));
            forward || reverse
        })
    }

    pub fn matches_compound(&self, query: &str, keyword: &str) -> bool {
        self.compounds.iter().any(|rule| {
            !rule.query_groups.is_empty()
                && rule
                    .query_groups
                    .iter()
                    .all(|group| group.iter().any(|t| query.contains(t.as_str())))
                && rule.keyword_terms.iter().all(|t| keyword.contains(t.as_str()))
        })
    }

    pub fn matches_question_pattern(&self, query: &str, keyword: &str) -> bool {
        self.questions.iter().any(|rule| {
            keyword.contains(&rule.keyword) && rule.patterns.iter().any(|re| re.is_match(query))
        })
    }

    fn is_variation_normalized(&self, query: &str, keyword: &str) -> bool {
        if query.is_empty() || keyword.is_empty() {
            return false;
        }
        query.contains(keyword)
            || keyword.contains(query)
            || self.matches_table(query, keyword)
            || self.matches_compound(query, keyword)
            || self.matches_question_pattern(query, keyword)
    }
}

impl IVariationStrategy for RuleBasedVariation {
    fn is_variation_of(&self, query: &str, keyword: &str) -> bool {
        self.is_variation_normalized(&normalize_text(query), &normalize_text(keyword))
    }

    fn variation_score(&self, query: &str, keyword: &str) -> u32 {
        if query.trim().eq_ignore_ascii_case(keyword.trim()) {
            return MAX_VARIATION_SCORE;
        }
        let q = normalize_text(query);
        let k = normalize_text(keyword);
        if !q.is_empty() && q == k {
            return MAX_VARIATION_SCORE;
        }

        let mut score = 0;
        if self.is_variation_normalized(&q, &k) {
            score += VARIATION_HIT;
        }

        let keyword_words: Vec<&str> = k.split_whitespace().collect();
        let overlapping = q
            .split_whitespace()
            .filter(|w| keyword_words.iter().any(|kw| kw.contains(w) || w.contains(kw)))
            .count() as u32;
        score += overlapping * VARIATION_TOKEN_OVERLAP;

        let shared_ranking_words = self
            .ranking_words
            .iter()
            .filter(|w| q.contains(w.as_str()) && k.contains(w.as_str()))
            .count() as u32;
        score += shared_ranking_words * VARIATION_IMPORTANT_WORD;

        score.min(MAX_VARIATION_SCORE)
    }

    fn name(&self) -> &str {
        "rule_based"
    }
}
