//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

use log::LevelFilter;

/// Initialize the logging system
///
/// `default_level` applies when `RUST_LOG` is not set; an unparsable level
/// falls back to `info`. Calling this twice is harmless: the second
/// initialization attempt is ignored.
pub fn init(default_level: &str) {
    let level = parse_level(default_level);
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init();
}

/// Parse a level name such as `"debug"` into a filter.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}
