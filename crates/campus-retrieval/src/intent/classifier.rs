//! Two-stage classifier over a compiled intent catalog.
//!
//! Stage 1 tests non-domain patterns in declared order against the
//! normalized query; the first hit wins and forces the fallback. Stage 2
//! accumulates domain keyword scores over the lower-cased raw query:
//! `weight` per whole-word hit, a standalone bonus when the keyword is
//! bounded by whitespace, and a plural bonus for `kw+s` / `kw+es`.

use campus_core::catalog::IntentCatalog;
use campus_core::constants::{INTENT_PLURAL_BONUS, INTENT_STANDALONE_BONUS};
use campus_core::errors::{CampusResult, CatalogError};
use campus_core::intent::{IntentDefinition, IntentKind, IntentResult, IntentScore};
use regex::Regex;
use tracing::debug;

use crate::matching;
use crate::normalize::normalize_text;

struct CompiledPatternIntent {
    name: String,
    weight: u32,
    patterns: Vec<(String, Regex)>,
}

struct CompiledKeyword {
    whole_word: Regex,
    standalone: Regex,
    plural_s: String,
    plural_es: String,
}

struct CompiledKeywordIntent {
    name: String,
    weight: u32,
    categories: Vec<String>,
    keywords: Vec<CompiledKeyword>,
}

/// Intent catalog compiled once at startup; immutable afterwards.
pub struct IntentClassifier {
    non_domain: Vec<CompiledPatternIntent>,
    domain: Vec<CompiledKeywordIntent>,
}

impl IntentClassifier {
    pub fn new(catalog: &IntentCatalog) -> CampusResult<Self> {
        catalog.check_unique()?;
        let non_domain = catalog
            .non_domain
            .iter()
            .map(compile_pattern_intent)
            .collect::<Result<Vec<_>, _>>()?;
        let domain = catalog
            .domain
            .iter()
            .map(compile_keyword_intent)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { non_domain, domain })
    }

    /// Classify a raw query. Total: unmatched or empty input yields `unknown`.
    pub fn classify(&self, raw_query: &str) -> IntentResult {
        self.classify_prepared(raw_query, &normalize_text(raw_query))
    }

    /// Classify when the caller already holds the normalized text.
    pub fn classify_prepared(&self, raw_query: &str, normalized: &str) -> IntentResult {
        if normalized.is_empty() {
            return IntentResult::unknown("empty query");
        }

        if let Some(result) = self.match_non_domain(normalized) {
            debug!(intent = %result.intent, "non-domain intent pre-empts retrieval");
            return result;
        }

        let lowered = raw_query.trim().to_lowercase();
        let ranked = self.score_domain(&lowered);

        let Some(top) = ranked.first() else {
            return IntentResult::unknown("no intent keywords matched");
        };

        let categories = self
            .domain
            .iter()
            .find(|d| d.name == top.intent)
            .map(|d| d.categories.clone())
            .unwrap_or_default();

        let result = IntentResult {
            intent: top.intent.clone(),
            kind: IntentKind::Domain,
            confidence: (f64::from(top.score) / 100.0).min(1.0),
            should_use_fallback: false,
            reason: format!("matched domain intent '{}' (score {})", top.intent, top.score),
            categories,
            ranked,
        };
        debug!(intent = %result.intent, confidence = result.confidence, "classified intent");
        result
    }

    fn match_non_domain(&self, normalized: &str) -> Option<IntentResult> {
        self.non_domain.iter().find_map(|intent| {
            intent
                .patterns
                .iter()
                .find(|(_, re)| re.is_match(normalized))
                .map(|(source, _)| IntentResult {
                    intent: intent.name.clone(),
                    kind: IntentKind::NonDomain,
                    confidence: (f64::from(intent.weight) / 100.0).min(1.0),
                    should_use_fallback: true,
                    reason: format!("matched conversational pattern '{source}'"),
                    categories: Vec::new(),
                    ranked: Vec::new(),
                })
        })
    }

    /// Non-zero domain scores, best first. Ties keep catalog order.
    fn score_domain(&self, lowered: &str) -> Vec<IntentScore> {
        let mut ranked: Vec<IntentScore> = self
            .domain
            .iter()
            .filter_map(|intent| {
                let score: u32 = intent
                    .keywords
                    .iter()
                    .map(|kw| {
                        let mut points = 0;
                        if kw.whole_word.is_match(lowered) {
                            points += intent.weight;
                            if kw.standalone.is_match(lowered) {
                                points += INTENT_STANDALONE_BONUS;
                            }
                        }
                        if lowered.contains(&kw.plural_s) || lowered.contains(&kw.plural_es) {
                            points += INTENT_PLURAL_BONUS;
                        }
                        points
                    })
                    .sum();
                (score > 0).then(|| IntentScore {
                    intent: intent.name.clone(),
                    score,
                })
            })
            .collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

fn compile_pattern_intent(def: &IntentDefinition) -> Result<CompiledPatternIntent, CatalogError> {
    let mut patterns = Vec::with_capacity(def.patterns.len() + def.keywords.len());
    for p in &def.patterns {
        patterns.push((p.clone(), matching::pattern(&def.name, p)?));
    }
    // Keywords on a non-domain intent behave like whole-word patterns.
    for kw in &def.keywords {
        patterns.push((kw.clone(), matching::whole_word(&def.name, &kw.to_lowercase())?));
    }
    Ok(CompiledPatternIntent {
        name: def.name.clone(),
        weight: def.weight,
        patterns,
    })
}

fn compile_keyword_intent(def: &IntentDefinition) -> Result<CompiledKeywordIntent, CatalogError> {
    let mut keywords = Vec::with_capacity(def.keywords.len());
    for kw in &def.keywords {
        let kw = kw.to_lowercase();
        keywords.push(CompiledKeyword {
            whole_word: matching::whole_word(&def.name, &kw)?,
            standalone: matching::standalone(&def.name, &kw)?,
            plural_s: format!("{kw}s"),
            plural_es: format!("{kw}es"),
        });
    }
    Ok(CompiledKeywordIntent {
        name: def.name.clone(),
        weight: def.weight,
        categories: def.categories.clone(),
        keywords,
    })
}
