//! Lexa Engine CLI
//!
//! Library surface of the `lexa` binary: command handlers and the
//! shipped rule set. Kept as a library so the rule set stays testable
//! and reusable outside the binary.

use std::sync::Once;

pub mod commands;
pub mod rules;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=lexac=debug` or `RUST_LOG=lexac=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
