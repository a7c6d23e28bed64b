//! Tracing subscriber setup
//!
//! Never installed implicitly; embedders opt in from their entry point.

use tracing_subscriber::EnvFilter;

/// Install an env-filtered fmt subscriber
///
/// Reads `RUST_LOG`, defaulting to `info`. Safe to call more than once; a
/// second install attempt is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
