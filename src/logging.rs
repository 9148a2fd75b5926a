//! Tracing initialization

use std::io;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter, e.g. `wordle_filter=debug`
pub const LOG_ENV: &str = "WORDLE_FILTER_LOG";

static INIT: Once = Once::new();

/// Initialize logging to stderr
///
/// Falls back to `warn` when `WORDLE_FILTER_LOG` is unset or invalid, which
/// keeps the interactive modes quiet. Calling this more than once is a no-op.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed (embedding, tests)
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
