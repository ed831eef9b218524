//! Tracing setup for the server process.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "guide_server=info,guide=info,tower_http=info";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; falls back to info for this workspace's crates.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=guide=debug,tower_http=debug cargo run -p guide-server
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
