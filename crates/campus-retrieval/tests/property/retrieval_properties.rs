//! Property tests for the retrieval pipeline.

use std::sync::OnceLock;

use campus_core::catalog::VariationRules;
use campus_core::config::CampusConfig;
use campus_core::knowledge::KnowledgeEntry;
use campus_core::traits::IVariationStrategy;
use campus_retrieval::normalize::{normalize_text, Normalizer};
use campus_retrieval::search::cosine_similarity;
use campus_retrieval::{RetrievalEngine, RuleBasedVariation};
use proptest::prelude::*;

/// Compiling the catalog is costly; every case shares one engine.
fn engine() -> &'static RetrievalEngine {
    static ENGINE: OnceLock<RetrievalEngine> = OnceLock::new();
    ENGINE.get_or_init(|| RetrievalEngine::from_config(&CampusConfig::default()).unwrap())
}

fn rules() -> &'static RuleBasedVariation {
    static RULES: OnceLock<RuleBasedVariation> = OnceLock::new();
    RULES.get_or_init(|| RuleBasedVariation::new(&VariationRules::default()).unwrap())
}

fn keyword_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2,10}( [a-z]{2,10}){0,3}"
}

fn entries_strategy() -> impl Strategy<Value = Vec<KnowledgeEntry>> {
    prop::collection::vec(
        (keyword_strategy(), "[a-z ]{1,40}", prop::option::of(-5i32..5)),
        0..8,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(k, a, p)| {
                let entry = KnowledgeEntry::new(k, format!("answer {a}"));
                match p {
                    Some(p) => entry.with_priority(p),
                    None => entry,
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in ".{0,80}") {
        let once = normalize_text(&raw);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn tokens_never_contain_single_characters(raw in "[a-zA-Z ?!,.]{0,80}") {
        let q = Normalizer::default().normalize(&raw);
        prop_assert!(q.tokens.iter().all(|t| t.chars().count() > 1));
    }

    #[test]
    fn keyword_is_a_full_variation_of_itself(keyword in keyword_strategy()) {
        let rules = rules();
        prop_assert_eq!(rules.variation_score(&keyword, &keyword), 100);
        prop_assert!(rules.is_variation_of(&keyword, &keyword));
    }

    #[test]
    fn variation_score_stays_in_range(q in "[a-z ]{0,40}", k in "[a-z ]{0,40}") {
        let rules = rules();
        prop_assert!(rules.variation_score(&q, &k) <= 100);
    }

    #[test]
    fn exact_keyword_query_ranks_an_exact_entry_first(
        kb in entries_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!kb.is_empty());
        let target = &kb[pick.index(kb.len())];
        let ranked = engine().rank(&target.keyword, &kb);
        prop_assert!(!ranked.is_empty());
        prop_assert!(ranked[0].score >= 100);
        prop_assert_eq!(normalize_text(&ranked[0].entry.keyword), normalize_text(&target.keyword));
    }

    #[test]
    fn retrieval_is_total_and_deterministic(query in ".{0,60}", kb in entries_strategy()) {
        let e = engine();
        let a = e.retrieve_with_embedding(&query, &kb, None);
        let b = e.retrieve_with_embedding(&query, &kb, None);
        prop_assert_eq!(a.use_local, b.use_local);
        prop_assert_eq!(&a.context_text, &b.context_text);
        prop_assert_eq!(a.best_keyword(), b.best_keyword());
        prop_assert_eq!(&a.matches, &b.matches);
        if !a.use_local {
            prop_assert!(b.context_text.is_empty());
        }
    }

    #[test]
    fn ranks_are_sorted_by_score(query in "[a-z ]{1,30}", kb in entries_strategy()) {
        let ranked = engine().rank(&query, &kb);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            prop_assert_eq!(pair[0].rank + 1, pair[1].rank);
        }
    }

    #[test]
    fn cosine_is_bounded(v in prop::collection::vec(-10.0f32..10.0, 1..16)) {
        let w: Vec<f32> = v.iter().rev().copied().collect();
        if let Some(sim) = cosine_similarity(&v, &w) {
            prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim));
        }
    }
}
