//! Tracing infrastructure for the CLI binary.
//!
//! Console logging filtered via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=promptpad=debug` - crate-level filtering
//! - `RUST_LOG=promptpad::expand=trace` - module-level filtering
//!
//! Library embedders install their own subscriber instead of calling this.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the console tracing subscriber.
///
/// Defaults to `warn` when RUST_LOG is unset. Logs go to stderr so resolved
/// prompt output on stdout stays clean for piping.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
