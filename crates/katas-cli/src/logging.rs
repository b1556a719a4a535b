//! Diagnostic logging for the katas binaries.
//!
//! Reports go to stdout via `println!`; tracing events go to stderr and are
//! filtered by `RUST_LOG` (default `warn`).
//!
//! ```bash
//! RUST_LOG=katas=debug katas_demo odd
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
