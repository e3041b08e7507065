use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod backend;
mod explore;
mod ui;

use backend::BackendSection;
use explore::{ExploreSection, LocationSection};
use ui::{LoggingSection, UiSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    backend: BackendSection,
    location: LocationSection,
    explore: ExploreSection,
    ui: UiSection,
    logging: LoggingSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.backend.apply_cli_overrides(cli);
        self.location.apply_cli_overrides(cli);
        self.explore.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
        self.logging.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = self.sources(cli);

        let (backend, fixture) = self.backend.resolve(&sources).map_err(Error::new)?;
        let location = self.location.resolve(&sources).map_err(Error::new)?;
        let explore = self.explore.finalize();
        let (theme_name, theme) = self.ui.resolve(&sources).map_err(Error::new)?;
        let log_level = self.logging.resolve(&sources).map_err(Error::new)?;

        let config = ResolvedConfig {
            backend,
            fixture,
            location,
            categories: explore.categories,
            initial_category: explore.initial_category,
            currency_symbol: explore.currency_symbol,
            theme_name,
            theme,
            log_level,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }

    fn sources(&self, cli: &CliArgs) -> ConfigSources {
        ConfigSources {
            backend_url: detect_source(
                cli.backend_url.is_some(),
                self.backend.url.is_some(),
                "DRIVE__BACKEND__URL",
                "--backend-url",
                "backend.url",
            ),
            backend_anon_key: detect_source(
                cli.anon_key.is_some(),
                self.backend.anon_key.is_some(),
                "DRIVE__BACKEND__ANON_KEY",
                "--anon-key",
                "backend.anon_key",
            ),
            backend_fixture: detect_source(
                cli.fixture.is_some(),
                self.backend.fixture.is_some(),
                "DRIVE__BACKEND__FIXTURE",
                "--fixture",
                "backend.fixture",
            ),
            location_latitude: detect_source(
                cli.latitude.is_some(),
                self.location.latitude.is_some(),
                "DRIVE__LOCATION__LATITUDE",
                "--latitude",
                "location.latitude",
            ),
            location_longitude: detect_source(
                cli.longitude.is_some(),
                self.location.longitude.is_some(),
                "DRIVE__LOCATION__LONGITUDE",
                "--longitude",
                "location.longitude",
            ),
            explore_category: detect_source(
                cli.category.is_some(),
                self.explore.category.is_some(),
                "DRIVE__EXPLORE__CATEGORY",
                "--category",
                "explore.category",
            ),
            explore_currency_symbol: detect_source(
                false,
                self.explore.currency_symbol.is_some(),
                "DRIVE__EXPLORE__CURRENCY_SYMBOL",
                "",
                "explore.currency_symbol",
            ),
            ui_theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "DRIVE__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            logging_level: detect_source(
                cli.log_level.is_some(),
                self.logging.level.is_some(),
                "DRIVE__LOGGING__LEVEL",
                "--log-level",
                "logging.level",
            ),
        }
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
