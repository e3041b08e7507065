use drive::logging;
use drive::theme::{self, DEFAULT_THEME, Theme};
use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

pub(super) const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Presentation settings prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) theme: Option<String>,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(theme) = cli.theme.clone() {
            self.theme = Some(theme);
        }
    }

    /// Returns the theme's display name alongside the palette.
    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<(String, Theme), ConfigError> {
        let name = self.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
        match theme::by_name(&name) {
            Some(theme) => Ok((name.trim().to_ascii_lowercase(), theme)),
            None => Err(ConfigError::invalid(
                "ui.theme",
                name,
                sources.source_for_theme(),
                format!("expected one of: {}", theme::names().join(", ")),
            )),
        }
    }
}

/// Log console verbosity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
    pub(super) level: Option<String>,
}

impl LoggingSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level.clone() {
            self.level = Some(level);
        }
    }

    pub(super) fn resolve(self, sources: &ConfigSources) -> Result<LevelFilter, ConfigError> {
        let Some(level) = self.level else {
            return Ok(DEFAULT_LOG_LEVEL);
        };
        logging::parse_level(&level).ok_or_else(|| {
            ConfigError::invalid(
                "logging.level",
                level,
                sources.source_for_log_level(),
                "expected one of: off, error, warn, info, debug, trace",
            )
        })
    }
}
