//! Rule catalogs: the static keyword, pattern, and synonym tables.
//!
//! Catalogs are plain data with built-in defaults. They are constructed once
//! at startup, optionally overridden from TOML, compiled by the retrieval
//! crate, and never mutated afterwards. Every table that has a "first match
//! wins" reading is an ordered `Vec`.

mod intents;
mod lexicon;
mod variations;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CampusResult, CatalogError};

pub use intents::IntentCatalog;
pub use lexicon::Lexicon;
pub use variations::{BaseVariation, CompoundRule, QuestionPatternRule, VariationRules};

/// All rule tables used by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleCatalog {
    pub lexicon: Lexicon,
    pub intents: IntentCatalog,
    pub variations: VariationRules,
}

impl RuleCatalog {
    /// Parse a catalog from TOML. Tables absent from the input keep their
    /// built-in defaults; tables present replace the defaults wholesale.
    pub fn from_toml(toml_str: &str) -> CampusResult<Self> {
        let catalog: Self = toml::from_str(toml_str).map_err(|e| CatalogError::ParseFailed {
            reason: e.to_string(),
        })?;
        catalog.intents.check_unique()?;
        Ok(catalog)
    }

    pub fn from_file(path: &Path) -> CampusResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ParseFailed {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }
}
