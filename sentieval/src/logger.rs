// sentieval/src/logger.rs
//! Logger setup for the sentieval binary.
//!
//! `RUST_LOG` is honoured when no explicit level is requested; otherwise the
//! default is `warn`. All log output goes to stderr, so stdout only carries
//! the report.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global `env_logger`.
///
/// An explicit `level` wins over `RUST_LOG`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(false);

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized; keeping the existing one.");
    }
}
