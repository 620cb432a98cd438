//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the rulestab tracing/logging system.
///
/// Reads the `RULESTAB_LOG` environment variable for per-module log levels.
/// Format: `RULESTAB_LOG=rulestab_analysis::trials=debug,rulestab_analysis=info`
///
/// Falls back to `rulestab=info` if `RULESTAB_LOG` is not set or is invalid.
/// Idempotent; a subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RULESTAB_LOG")
            .unwrap_or_else(|_| EnvFilter::new("rulestab=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
