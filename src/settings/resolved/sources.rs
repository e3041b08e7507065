use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) backend_url: Option<SettingSource>,
    pub(crate) backend_anon_key: Option<SettingSource>,
    pub(crate) backend_fixture: Option<SettingSource>,
    pub(crate) location_latitude: Option<SettingSource>,
    pub(crate) location_longitude: Option<SettingSource>,
    pub(crate) explore_category: Option<SettingSource>,
    pub(crate) explore_currency_symbol: Option<SettingSource>,
    pub(crate) ui_theme: Option<SettingSource>,
    pub(crate) logging_level: Option<SettingSource>,
}

fn or_key(source: &Option<SettingSource>, key: &'static str) -> SettingSource {
    source.clone().unwrap_or(SettingSource::ConfigKey(key))
}

impl ConfigSources {
    pub(crate) fn source_for_url(&self) -> SettingSource {
        or_key(&self.backend_url, "backend.url")
    }

    pub(crate) fn source_for_anon_key(&self) -> SettingSource {
        or_key(&self.backend_anon_key, "backend.anon_key")
    }

    pub(crate) fn source_for_fixture(&self) -> SettingSource {
        or_key(&self.backend_fixture, "backend.fixture")
    }

    pub(crate) fn source_for_latitude(&self) -> SettingSource {
        or_key(&self.location_latitude, "location.latitude")
    }

    pub(crate) fn source_for_longitude(&self) -> SettingSource {
        or_key(&self.location_longitude, "location.longitude")
    }

    pub(crate) fn source_for_category(&self) -> SettingSource {
        or_key(&self.explore_category, "explore.category")
    }

    pub(crate) fn source_for_currency_symbol(&self) -> SettingSource {
        or_key(&self.explore_currency_symbol, "explore.currency_symbol")
    }

    pub(crate) fn source_for_theme(&self) -> SettingSource {
        or_key(&self.ui_theme, "ui.theme")
    }

    pub(crate) fn source_for_log_level(&self) -> SettingSource {
        or_key(&self.logging_level, "logging.level")
    }
}
