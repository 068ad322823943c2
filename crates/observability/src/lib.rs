//! Tracing/logging setup shared by binaries and test harnesses.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing/logging.
///
/// Filtering comes from `RUST_LOG` and defaults to `info`. Safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
