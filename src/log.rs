// src/log.rs
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a stderr fmt subscriber. `RUST_LOG` overrides the level.
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
