/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Intent name returned when no catalog intent matches.
pub const UNKNOWN_INTENT: &str = "unknown";

/// Separator placed between entries when assembling answer context.
pub const CONTEXT_SEPARATOR: &str = "\n\n";

/// Upper bound of `variation_score`.
pub const MAX_VARIATION_SCORE: u32 = 100;

/// Priority assigned to database records that do not carry one.
pub const DEFAULT_DATABASE_PRIORITY: i32 = 50;

// --- Relevance signal weights ---
pub const SCORE_EXACT_MATCH: u32 = 100;
pub const SCORE_QUERY_CONTAINS_KEYWORD: u32 = 80;
pub const SCORE_KEYWORD_CONTAINS_QUERY: u32 = 70;
pub const SCORE_KEYWORD_PREFIX: u32 = 15;
pub const SCORE_CONTENT_WORD: u32 = 15;
pub const SCORE_SYNONYM: u32 = 60;
pub const SCORE_PHRASE_SYNONYM: u32 = 50;
pub const SCORE_INTENT_CATEGORY: u32 = 25;

// --- Word-overlap fallback weights ---
pub const OVERLAP_KEYWORD: u32 = 10;
pub const OVERLAP_ANSWER: u32 = 5;
pub const OVERLAP_SYNONYM: u32 = 8;

// --- Variation score weights ---
pub const VARIATION_HIT: u32 = 80;
pub const VARIATION_TOKEN_OVERLAP: u32 = 10;
pub const VARIATION_IMPORTANT_WORD: u32 = 15;

// --- Domain intent keyword bonuses ---
pub const INTENT_STANDALONE_BONUS: u32 = 2;
pub const INTENT_PLURAL_BONUS: u32 = 1;
