//! Logging setup
//!
//! Console logging on stderr, filtered by the RUST_LOG environment
//! variable:
//! - `RUST_LOG=rake_outline=debug` - watch scope opens/closes and
//!   declarations during traversal
//! - `RUST_LOG=warn` (default) - unbalanced-scope warnings only

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for the CLI
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
