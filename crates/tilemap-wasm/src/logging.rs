//! Browser console logging through `console_log`.

use log::{Level, LevelFilter};

/// Install the console logger. Later calls only adjust the level.
///
/// The logger itself is registered at `Trace`; the `log` max level is what
/// actually filters, so `set_log_level` can raise or lower it at runtime.
pub fn init(level: LevelFilter) {
    if console_log::init_with_level(Level::Trace).is_err() {
        log::debug!("console logger already installed");
    }
    log::set_max_level(level);
}

/// Parse a level name (`"warn"`, `"debug"`, ...), defaulting to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_level_accepts_names() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }
}
