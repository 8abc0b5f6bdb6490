use serde::{Deserialize, Serialize};

/// Which catalog an intent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    /// Answerable from the knowledge base.
    Domain,
    /// Conversational; always routed to the fallback generator.
    NonDomain,
    /// Nothing matched.
    Unknown,
}

impl IntentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::NonDomain => "non_domain",
            Self::Unknown => "unknown",
        }
    }
}

/// Static intent record. Catalogs are ordered sequences of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentDefinition {
    pub name: String,
    /// Whole-word trigger keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Regex patterns, tested against the normalized query.
    #[serde(default)]
    pub patterns: Vec<String>,
    pub weight: u32,
    /// Knowledge categories that earn the intent-category bonus.
    #[serde(default)]
    pub categories: Vec<String>,
}

impl IntentDefinition {
    pub fn keywords(name: &str, weight: u32, keywords: &[&str], categories: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            patterns: Vec::new(),
            weight,
            categories: categories.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn patterns(name: &str, weight: u32, patterns: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: Vec::new(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            weight,
            categories: Vec::new(),
        }
    }
}
