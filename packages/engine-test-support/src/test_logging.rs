//! Idempotent tracing setup for test binaries.
//!
//! Level precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`. Output goes
//! through the test writer so cargo and nextest capture it per test.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn install(json: bool) -> bool {
    let mut installed = false;
    INITIALIZED.get_or_init(|| {
        let builder = fmt()
            .with_env_filter(filter())
            .with_test_writer()
            .without_time();
        installed = if json {
            builder.json().try_init().is_ok()
        } else {
            builder.try_init().is_ok()
        };
    });
    installed
}

/// Install a compact subscriber once per process. Never panics.
///
/// Returns whether this call installed it.
pub fn init() -> bool {
    install(false)
}

/// Install a JSON-lines subscriber, matching what hosts see in production.
///
/// The global subscriber can be set once per process: whichever of `init`
/// and `init_json` runs first picks the format, and every later call is a
/// no-op returning `false`. Binaries that want JSON must call this before
/// anything calls `init`.
pub fn init_json() -> bool {
    install(true)
}
