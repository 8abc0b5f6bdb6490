mod degradation_event;
mod normalized_query;
mod query_analysis;
mod retrieval_verdict;
mod scored_match;

pub use degradation_event::DegradationEvent;
pub use normalized_query::NormalizedQuery;
pub use query_analysis::QueryAnalysis;
pub use retrieval_verdict::{RetrievalVerdict, VerdictSource};
pub use scored_match::{MatchExplanation, MatchTier, ScoredMatch, Signal};
