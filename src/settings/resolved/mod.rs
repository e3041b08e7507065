use std::path::PathBuf;

use drive::listings::{BackendConfig, Category, Coordinate};
use drive::theme::Theme;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend: Option<BackendConfig>,
    pub fixture: Option<PathBuf>,
    pub location: Option<Coordinate>,
    pub categories: Vec<Category>,
    pub initial_category: Category,
    pub currency_symbol: String,
    pub theme_name: String,
    pub theme: Theme,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}
