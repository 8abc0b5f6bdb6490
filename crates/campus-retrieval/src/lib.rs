//! # campus-retrieval
//!
//! The query engine. Local-first pipeline: deterministic lexical matching,
//! then an optional embedding fallback, then deferral to the generator.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── Normalizer (lower-case, strip punctuation, stop-word filter)
//! ├── IntentClassifier
//! │   ├── Non-domain patterns (first hit wins, always fallback)
//! │   ├── Domain keyword scoring (whole-word, standalone, plural)
//! │   └── Guidance (suggestions, priority, escalation)
//! ├── Variation strategies (IVariationStrategy)
//! │   ├── RuleBasedVariation (tables, compound rules, question patterns)
//! │   └── EmbeddingVariation (cosine over provider embeddings)
//! ├── RankingPipeline
//! │   ├── Scorer (exact, substring, prefix, content words, synonyms,
//! │   │           variation, intent category, word-overlap fallback)
//! │   └── Tie-break (score, priority, source, insertion order)
//! ├── VectorFallback (timed query embedding + cosine ranking)
//! └── Context builder (text handed to the answer synthesizer)
//! ```

pub mod context;
pub mod engine;
pub mod intent;
pub mod matching;
pub mod normalize;
pub mod ranking;
pub mod search;
pub mod variation;

pub use engine::RetrievalEngine;
pub use intent::IntentClassifier;
pub use normalize::Normalizer;
pub use ranking::RankingPipeline;
pub use search::VectorFallback;
pub use variation::{EmbeddingVariation, RuleBasedVariation};
