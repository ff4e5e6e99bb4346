//! Logging setup for the point driver
//!
//! The driver itself only emits `tracing` events; hosts that want output on
//! stderr can call [`init_logging`] once at startup. `RUST_LOG` overrides the
//! default level filter.

use tracing_subscriber::EnvFilter;

/// Initialize a stderr subscriber with an environment-driven filter.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
