//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the flexion tracing/logging system.
///
/// Reads the `FLEXION_LOG` environment variable for log levels, e.g.
/// `FLEXION_LOG=flexion_engine=debug`. Falls back to `flexion=info` if
/// `FLEXION_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FLEXION_LOG")
            .unwrap_or_else(|_| EnvFilter::new("flexion=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
