//! Tracing setup: structured logging plus span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{ObservabilityConfig, ENV_LOG_LEVEL};

static INIT: Once = Once::new();

/// Default filter when `POSHA_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "posha=info";

/// Initialize the tracing subscriber.
///
/// Reads `POSHA_LOG` for per-crate levels, e.g.
/// `POSHA_LOG=posha_storage=debug,posha_analytics=info`.
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(ENV_LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, false);
}

/// Initialize tracing at the configured level. `POSHA_LOG` still wins when set.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(ENV_LOG_LEVEL)
        .unwrap_or_else(|_| EnvFilter::new(filter_for_level(&config.log_level)));
    install(filter, false);
}

/// Directive applying `level` to every posha crate.
pub fn filter_for_level(level: &str) -> String {
    format!("posha={level}")
}

/// Initialize tracing with an explicit filter and JSON output.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), true);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // Another subscriber may already be installed by the host process.
        if let Err(e) = result {
            tracing::debug!(error = %e, "tracing subscriber already set");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_maps_to_crate_prefix_directive() {
        assert_eq!(filter_for_level("debug"), "posha=debug");
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init_tracing_with_filter("posha=debug");
        init_tracing();
        init_tracing_from_config(&ObservabilityConfig::default());
    }
}
