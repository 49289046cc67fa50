//! Shared helpers for the symtab integration tests.

#![allow(dead_code)]

use std::sync::Once;

use symtab::Interner;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static LOGGING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to `warn` so exhaustion events show up.
pub fn init_logging() {
    LOGGING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer().with_target(false))
            .try_init();
    });
}

/// Interner pre-filled with `symbols` in order.
pub fn interner_with(symbols: &[&str]) -> Interner {
    let mut interner = Interner::new();
    interner
        .intern_all(symbols.iter().copied())
        .expect("default capacity fits test fixtures");
    interner
}

/// Number of distinct strings in `items`.
pub fn distinct_count(items: &[String]) -> usize {
    items.iter().collect::<std::collections::HashSet<_>>().len()
}
