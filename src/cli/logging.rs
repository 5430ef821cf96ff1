//! Diagnostic logging setup.
//!
//! Per-archive diagnostics go through `tracing` to stderr; completion
//! summaries are printed separately to stdout.

use std::io;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Per-row failures are `warn!`.
fn default_directive(verbose: bool) -> &'static str {
    if verbose { "modlang=debug" } else { "warn" }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Ignore the error if a subscriber is already installed (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
