//! Retrieval metrics.

pub mod verdict_metrics;

pub use verdict_metrics::VerdictMetrics;
