mod catalog_config;
pub mod defaults;
mod embedding_config;
mod observability_config;
mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::RuleCatalog;
use crate::errors::{CampusError, CampusResult};

pub use catalog_config::CatalogConfig;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CampusConfig {
    pub retrieval: RetrievalConfig,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
    pub catalog: CatalogConfig,
}

impl CampusConfig {
    /// Parse from TOML. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> CampusResult<Self> {
        toml::from_str(toml_str).map_err(|e| CampusError::Config {
            reason: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> CampusResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CampusError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&content)
    }

    /// Built-in rule catalog, or the override file named in `[catalog]`.
    pub fn load_catalog(&self) -> CampusResult<RuleCatalog> {
        match &self.catalog.path {
            Some(path) => RuleCatalog::from_file(Path::new(path)),
            None => Ok(RuleCatalog::default()),
        }
    }
}
