//! Logging setup for the binary.

use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only this crate logs, at `info` (`debug` when
/// `verbose`). A second call leaves the first subscriber in place.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "kl_reload=debug"
    } else {
        "kl_reload=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
