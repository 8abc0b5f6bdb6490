use serde::{Deserialize, Serialize};

/// Where rule tables come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a TOML rule file. `None` uses the built-in tables.
    pub path: Option<String>,
}
