// dicesim/src/logger.rs
//! Logging setup for the dicesim binary and its tests.
//!
//! Log lines go to stderr as `[LEVEL target] message` so they never mix with
//! the rendered results on stdout.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger.
///
/// `RUST_LOG` is honored unless `level` is given, in which case it overrides
/// the filter for every target. The default level is `warn`. Calling this more
/// than once is harmless; only the first call installs a logger.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        });

    let _ = builder.try_init();
}
