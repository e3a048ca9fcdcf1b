//! Diagnostic tracing for the `rover-deploy` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the host. Plans and parsed commands go to stdout, logs go to stderr.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// ```bash
/// RUST_LOG=rover_deploy=trace rover-deploy run rovers.txt --width 5 --height 5
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
