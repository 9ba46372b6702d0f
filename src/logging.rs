//! Tracing subscriber setup.
//!
//! Output goes to stderr so it never mixes with the summary printed on
//! stdout. `RUST_LOG` overrides the level passed in, e.g.
//! `RUST_LOG=construction_estimator::engine=trace`.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. Calling it twice is harmless.
///
/// ```no_run
/// construction_estimator::logging::init("info");
/// ```
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .try_init();
}

/// Debug-level logging routed through the test harness capture.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
