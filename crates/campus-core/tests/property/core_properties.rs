//! Property tests for core models and configuration.

use campus_core::catalog::IntentCatalog;
use campus_core::config::CampusConfig;
use campus_core::intent::{IntentDefinition, IntentKind, IntentResult};
use campus_core::knowledge::KnowledgeEntry;
use campus_core::CampusError;
use proptest::prelude::*;

fn intent_with(kind: IntentKind, categories: Vec<String>) -> IntentResult {
    IntentResult {
        intent: "fees".into(),
        kind,
        confidence: 0.5,
        should_use_fallback: kind != IntentKind::Domain,
        reason: "generated".into(),
        categories,
        ranked: Vec::new(),
    }
}

proptest! {
    #[test]
    fn category_match_ignores_ascii_case(
        categories in prop::collection::vec("[a-z_]{1,12}", 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let wanted = categories[pick.index(categories.len())].to_uppercase();
        let domain = intent_with(IntentKind::Domain, categories.clone());
        prop_assert!(domain.covers_category(&wanted));

        let unknown = intent_with(IntentKind::Unknown, categories);
        prop_assert!(!unknown.covers_category(&wanted));
    }

    #[test]
    fn config_survives_a_toml_round_trip(
        overlap in 0u32..200,
        structural in 0u32..200,
        max_context in 1usize..10,
        timeout_ms in 1u64..60_000,
        variation_similarity in 0.0f64..1.0,
        json_logs in any::<bool>(),
    ) {
        let mut config = CampusConfig::default();
        config.retrieval.overlap_threshold = overlap;
        config.retrieval.structural_threshold = structural;
        config.retrieval.max_context_entries = max_context;
        config.embedding.timeout_ms = timeout_ms;
        config.embedding.variation_similarity = variation_similarity;
        config.observability.json_logs = json_logs;

        let text = toml::to_string(&config).unwrap();
        let parsed = CampusConfig::from_toml(&text).unwrap();
        prop_assert_eq!(parsed.retrieval.overlap_threshold, overlap);
        prop_assert_eq!(parsed.retrieval.structural_threshold, structural);
        prop_assert_eq!(parsed.retrieval.max_context_entries, max_context);
        prop_assert_eq!(parsed.embedding.timeout_ms, timeout_ms);
        prop_assert_eq!(parsed.embedding.variation_similarity, variation_similarity);
        prop_assert_eq!(parsed.observability.json_logs, json_logs);
    }

    #[test]
    fn entry_validity_tracks_blank_fields(keyword in "[ a-z]{0,8}", answer in "[ a-z]{0,8}") {
        let entry = KnowledgeEntry::new(keyword.clone(), answer.clone());
        let expected = !keyword.trim().is_empty() && !answer.trim().is_empty();
        prop_assert_eq!(entry.is_valid(), expected);
        prop_assert!(entry.context_line().starts_with(&keyword));
    }

    #[test]
    fn any_repeated_intent_name_is_rejected(
        pick in any::<prop::sample::Index>(),
        weight in 1u32..50,
    ) {
        let mut catalog = IntentCatalog::default();
        let names: Vec<String> = catalog
            .non_domain
            .iter()
            .chain(catalog.domain.iter())
            .map(|d| d.name.clone())
            .collect();
        let name = names[pick.index(names.len())].clone();
        catalog.domain.push(IntentDefinition::keywords(&name, weight, &["duplicate"], &[]));
        prop_assert!(catalog.check_unique().is_err());
        let err: CampusError = catalog.check_unique().unwrap_err().into();
        prop_assert!(matches!(err, CampusError::CatalogError(_)));
    }
}
