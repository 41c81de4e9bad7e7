//! Test bootstrap: a process-wide tracing subscriber for test runs.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Install a stderr tracing subscriber once per test process.
///
/// Honors `RUST_LOG`; defaults to `debug` when unset. Safe to call from
/// every test; later calls are no-ops.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );
        // a harness may have installed a subscriber already; keep it
        let _ = subscriber.try_init();
    });
}
