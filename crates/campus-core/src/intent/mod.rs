//! Intent taxonomy: catalog definitions and classification results.

mod definition;
mod result;

pub use definition::{IntentDefinition, IntentKind};
pub use result::{IntentResult, IntentScore};
