// src/logging.rs
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is not set.
pub fn default_filter(debug: bool) -> String {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    format!("wekan_type={}", level)
}

/// Installs a stderr subscriber so diagnostics never mix with the board
/// report on stdout. RUST_LOG takes precedence over `debug`.
pub fn init_logging(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    // A subscriber may already be installed when called from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
