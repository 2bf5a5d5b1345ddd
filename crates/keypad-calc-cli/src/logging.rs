//! Log output for the binary
//!
//! Logs go to stderr so stdout carries only the display. `RUST_LOG` takes
//! precedence over the `-q`/`-v` flags:
//!
//! ```bash
//! RUST_LOG=keypad_calc=debug keypad-calc press 1 + 2 =
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::Verbosity;

/// Builds the filter: `RUST_LOG` if set, otherwise the verbosity level
#[must_use]
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(verbosity.filter_directive())
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .without_time()
        .with_filter(build_filter(verbosity));

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
