//! Logger setup
//!
//! Diagnostics go to stderr through `env_logger` so they never mix with the
//! game text on stdout. `RUST_LOG` takes precedence over the `-v` count.

use log::LevelFilter;

/// Map the number of `-v` flags to a default level
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Install the global logger; later calls are no-ops
pub fn init(verbosity: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();

    if result.is_ok() {
        log::debug!("logger initialised at {}", level_for(verbosity));
    }
}
