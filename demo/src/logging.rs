//! Diagnostics for the demo go to stderr so stdout only carries the paths.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Reads `RUST_LOG`, falling back to `warn`.
///
/// ```bash
/// RUST_LOG=robot=debug cargo run -p demo
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
