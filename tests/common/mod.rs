//! Shared helpers for integration tests

use std::sync::Once;

#[allow(dead_code)]
static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
#[allow(dead_code)]
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}
