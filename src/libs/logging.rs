//! Tracing setup for the binary.
//!
//! A subscriber is only installed in debug mode (`DAYTASK_DEBUG` or
//! `RUST_LOG` set). Without it, `tracing` events are dropped and users only
//! see the plain messages printed by the `msg_*` macros.

use super::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber writing to stderr. Safe to call more than once.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daytask=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
