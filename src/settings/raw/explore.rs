use drive::listings::{Category, Coordinate};
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use crate::cli::CliArgs;

/// Tags offered when the configuration does not list any.
pub(super) const DEFAULT_CATEGORIES: [&str; 7] =
    ["All", "SUV", "Sedan", "Truck", "Convertible", "Electric", "Van"];

pub(super) const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Category bar and price formatting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ExploreSection {
    pub(super) categories: Option<Vec<String>>,
    pub(super) category: Option<String>,
    pub(super) currency_symbol: Option<String>,
}

pub(super) struct ExploreResolution {
    pub(super) categories: Vec<Category>,
    pub(super) initial_category: Category,
    pub(super) currency_symbol: String,
}

impl ExploreSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(category) = cli.category.clone() {
            self.category = Some(category);
        }
    }

    pub(super) fn finalize(self) -> ExploreResolution {
        let tags = self
            .categories
            .unwrap_or_else(|| DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect());
        let categories = sanitize_categories(tags);

        let initial_category = self
            .category
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .map_or_else(Category::all, Category::new);

        let currency_symbol = self
            .currency_symbol
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

        ExploreResolution {
            categories,
            initial_category,
            currency_symbol,
        }
    }
}

/// Trim, drop blanks and duplicates, and make sure `"All"` leads the list.
pub(super) fn sanitize_categories(tags: Vec<String>) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::with_capacity(tags.len() + 1);
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || categories.iter().any(|known| known.as_str() == tag) {
            continue;
        }
        categories.push(Category::new(tag));
    }

    match categories.iter().position(Category::is_all) {
        Some(0) => {}
        Some(index) => {
            let all = categories.remove(index);
            categories.insert(0, all);
        }
        None => categories.insert(0, Category::all()),
    }
    categories
}

/// Device position reported to the map's locate control.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LocationSection {
    pub(super) latitude: Option<f64>,
    pub(super) longitude: Option<f64>,
}

impl LocationSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(latitude) = cli.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = cli.longitude {
            self.longitude = Some(longitude);
        }
    }

    pub(super) fn resolve(
        self,
        sources: &ConfigSources,
    ) -> Result<Option<Coordinate>, ConfigError> {
        match (self.latitude, self.longitude) {
            (None, None) => Ok(None),
            (Some(latitude), None) => Err(ConfigError::invalid(
                "location.latitude",
                latitude.to_string(),
                sources.source_for_latitude(),
                "location.longitude must be set as well",
            )),
            (None, Some(longitude)) => Err(ConfigError::invalid(
                "location.longitude",
                longitude.to_string(),
                sources.source_for_longitude(),
                "location.latitude must be set as well",
            )),
            (Some(latitude), Some(longitude)) => {
                if !(-90.0..=90.0).contains(&latitude) {
                    return Err(ConfigError::invalid(
                        "location.latitude",
                        latitude.to_string(),
                        sources.source_for_latitude(),
                        "must be between -90 and 90",
                    ));
                }
                Coordinate::new(latitude, longitude).map(Some).ok_or_else(|| {
                    ConfigError::invalid(
                        "location.longitude",
                        longitude.to_string(),
                        sources.source_for_longitude(),
                        "must be between -180 and 180",
                    )
                })
            }
        }
    }
}
