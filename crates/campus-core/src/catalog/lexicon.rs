use serde::{Deserialize, Serialize};

/// Word lists used by the normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub stop_words: Vec<String>,
    /// Domain words kept even when short or listed as stop-words.
    pub important_words: Vec<String>,
}

const STOP_WORDS: &[&str] = &[
    "what", "where", "when", "who", "how", "why", "which", "is", "are", "was", "were", "do",
    "does", "did", "can", "could", "would", "should", "may", "might", "must", "the", "a", "an",
    "and", "or", "but", "so", "for", "nor", "yet", "at", "by", "from", "in", "of", "on", "to",
    "with", "as", "into", "like", "than", "that", "this", "these", "those", "please", "tell",
    "me", "about", "give", "information", "regarding",
];

const IMPORTANT_WORDS: &[&str] = &[
    "library",
    "admission",
    "fee",
    "course",
    "program",
    "contact",
    "hostel",
    "scholarship",
    "registration",
    "exam",
    "graduation",
    "portal",
    "medical",
    "international",
    "vc",
    "warden",
    "bensdoff",
    "bugema",
    "university",
    "campus",
    "student",
    "location",
    "hours",
    "time",
    "phone",
    "email",
    "address",
    "vice",
    "chancellor",
];

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            important_words: IMPORTANT_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
