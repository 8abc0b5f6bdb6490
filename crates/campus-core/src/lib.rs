//! # campus-core
//!
//! Foundation crate for the campus knowledge engine.
//! Defines the knowledge entry model, rule catalogs, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod knowledge;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use catalog::RuleCatalog;
pub use config::CampusConfig;
pub use errors::{CampusError, CampusResult};
pub use intent::{IntentDefinition, IntentKind, IntentResult};
pub use knowledge::{KnowledgeEntry, KnowledgeSource};
pub use models::{QueryAnalysis, RetrievalVerdict, ScoredMatch, Signal, VerdictSource};
