//! Logging setup
//!
//! stdout carries the timeline, so every log line goes to stderr. The filter
//! comes from `RUST_LOG` when set; otherwise only warnings are shown, or
//! debug events with `--debug`.

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive for the given verbosity
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "timeline=debug"
    } else {
        "timeline=warn"
    }
}

/// Install the global stderr subscriber
///
/// Calling this more than once leaves the first subscriber in place.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new(default_directive(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
