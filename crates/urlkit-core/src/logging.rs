//! Logging init for the urlkit CLI: stderr only, env-filter controlled.
//!
//! stdout is the data channel (parsed components, built URLs), so diagnostics
//! go to stderr. `RUST_LOG` overrides the quiet default.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. Call once at process start.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,urlkit=info,urlkit_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
