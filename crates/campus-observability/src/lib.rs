//! # campus-observability
//!
//! Subscriber setup for the `tracing` events emitted across the workspace,
//! structured event helpers, verdict metrics, and tracking of embedding
//! degradations reported on retrieval verdicts.

pub mod degradation;
pub mod metrics;
pub mod observer;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use metrics::VerdictMetrics;
pub use observer::RetrievalObserver;
pub use tracing_setup::{init_from_config, init_tracing};
