use std::path::PathBuf;

use drive::listings::BackendConfig;
use serde::Deserialize;
use url::Url;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Connection settings for the hosted store, as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BackendSection {
    pub(super) url: Option<String>,
    pub(super) anon_key: Option<String>,
    pub(super) table: Option<String>,
    pub(super) fixture: Option<PathBuf>,
}

impl BackendSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(url) = cli.backend_url.clone() {
            self.url = Some(url);
        }
        if let Some(key) = cli.anon_key.clone() {
            self.anon_key = Some(key);
        }
        if let Some(path) = cli.fixture.clone() {
            self.fixture = Some(path);
        }
    }

    pub(super) fn resolve(
        self,
        sources: &ConfigSources,
    ) -> Result<(Option<BackendConfig>, Option<PathBuf>), ConfigError> {
        let url = self
            .url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());
        let Some(raw_url) = url else {
            return Ok((None, self.fixture));
        };

        let url = Url::parse(&raw_url).map_err(|err| {
            ConfigError::invalid(
                "backend.url",
                raw_url.clone(),
                sources.source_for_url(),
                err.to_string(),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::invalid(
                "backend.url",
                raw_url,
                sources.source_for_url(),
                "expected an http or https URL",
            ));
        }

        let anon_key = self
            .anon_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    "backend.anon_key",
                    sources.source_for_anon_key(),
                    "required when backend.url is set",
                )
            })?;

        let mut backend = BackendConfig::new(url, anon_key);
        if let Some(table) = self.table.map(|t| t.trim().to_string())
            && !table.is_empty()
        {
            backend.table = table;
        }

        Ok((Some(backend), self.fixture))
    }
}
