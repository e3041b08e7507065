use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    if config.backend.is_none() && config.fixture.is_none() {
        return Err(ConfigError::missing(
            "backend.url",
            sources.source_for_url(),
            "a backend URL or a fixture file is required",
        ));
    }

    if let Some(path) = &config.fixture
        && !path.is_file()
    {
        return Err(ConfigError::invalid(
            "backend.fixture",
            path.display().to_string(),
            sources.source_for_fixture(),
            "file does not exist",
        ));
    }

    if !config
        .categories
        .iter()
        .any(|category| category == &config.initial_category)
    {
        let known: Vec<&str> = config.categories.iter().map(|c| c.as_str()).collect();
        return Err(ConfigError::invalid(
            "explore.category",
            config.initial_category.as_str(),
            sources.source_for_category(),
            format!("expected one of: {}", known.join(", ")),
        ));
    }

    if config.currency_symbol.trim().is_empty() {
        return Err(ConfigError::invalid(
            "explore.currency_symbol",
            config.currency_symbol.clone(),
            sources.source_for_currency_symbol(),
            "must not be empty",
        ));
    }

    Ok(())
}
