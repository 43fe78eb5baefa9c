//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Scout tracing/logging system.
///
/// Reads `SCOUT_LOG` for per-subsystem log levels, e.g.
/// `SCOUT_LOG=scout_catalog=debug,scout_retrieval=info`.
/// Falls back to `config.log_filter` when `SCOUT_LOG` is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        if config.json {
            tracing_subscriber::registry()
                .with(layer.json())
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry().with(layer).with(filter).init();
        }
    });
}

/// Initialize tracing with a custom filter string and JSON output (for embedding hosts).
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
