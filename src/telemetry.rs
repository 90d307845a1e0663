//! Tracing subscriber initialization.

use tracing_subscriber::{EnvFilter, fmt};

use shareguard_core::config::logging::LoggingConfig;

/// Initialize tracing/logging.
///
/// `RUST_LOG` takes precedence over the configured level. Call once at
/// process startup; embedding hosts that already install a subscriber
/// should skip this and route ShareGuard's spans through their own.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
