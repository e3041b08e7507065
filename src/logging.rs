//! Route `log` records into the in-app console.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install `tui-logger` as the `log` backend. Later calls only adjust the level.
pub fn initialize(level: LevelFilter) {
    INIT.call_once(|| {
        if let Err(err) = tui_logger::init_logger(level) {
            eprintln!("drive: logger already installed: {err}");
        }
    });
    tui_logger::set_default_level(level);
    log::set_max_level(level);
}

/// Move buffered records into the widget's buffer. Call once per frame.
pub fn pump() {
    tui_logger::move_events();
}

/// Parse a level name as accepted by `--log-level`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn initialize_is_repeatable() {
        initialize(LevelFilter::Info);
        initialize(LevelFilter::Debug);
        pump();
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
