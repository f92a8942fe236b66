//! Shared helpers for integration tests.

#![allow(dead_code)]

use least_count::core::{ManualClock, Timestamp};
use least_count::rules::Scorekeeper;
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Deterministic engine starting at a fixed instant.
pub fn keeper() -> Scorekeeper<ManualClock> {
    init_logging();
    Scorekeeper::seeded(ManualClock::new(Timestamp(1_700_000_000_000)), 42)
}
