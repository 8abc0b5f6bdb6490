//! Tracing setup: subscriber installation plus event helpers.

pub mod events;

use campus_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "CAMPUS_LOG";

/// Install a plain-text subscriber filtered by `CAMPUS_LOG`, defaulting to
/// `info`. Returns false if a global subscriber was already set.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Install a subscriber from configuration. `CAMPUS_LOG` overrides
/// `log_level` when set. Returns false if a global subscriber was already set.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json_logs {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(json = config.json_logs, "tracing initialized");
    }
    installed
}

fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
