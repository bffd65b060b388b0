//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "WIDGET_MIGRATE_LOG";

static INIT: Once = Once::new();

/// Install the fmt subscriber, filtered by `WIDGET_MIGRATE_LOG`
/// (e.g. `widget_migrate::matcher=debug`), defaulting to `widget_migrate=info`.
///
/// Safe to call more than once; a subscriber installed elsewhere is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new("widget_migrate=info"));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}
