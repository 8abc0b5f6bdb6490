//! Intent classification: conversational pre-emption, then domain keyword scoring.

mod classifier;
pub mod guidance;

pub use classifier::IntentClassifier;
pub use guidance::{should_escalate, suggested_questions, IntentPriority};
