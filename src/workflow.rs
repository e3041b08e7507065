use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use drive::app_dirs;
use drive::auth::{AuthController, GoTrueProvider, IdentityProvider, OfflineProvider, SessionStore};
use drive::explore::ExploreScreen;
use drive::listings::{FixtureSource, ListingSource, ListingsFeed, RestSource};
use drive::logging;
use drive::map::{ConfiguredLocation, PriceFormat};
use log::warn;

use crate::cli::{OutputFormat, print_json, print_plain};
use crate::settings::ResolvedConfig;

/// How long `--list` waits for the backend before giving up.
const LIST_TIMEOUT: Duration = Duration::from_secs(60);

/// Wires the resolved configuration into listing sources, the identity
/// service and the terminal front end.
pub(crate) struct Workflow {
    config: ResolvedConfig,
}

impl Workflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        Self { config }
    }

    /// Run the interactive browser until the user quits.
    pub(crate) fn run(self) -> Result<()> {
        logging::initialize(self.config.log_level);

        let source = self.listing_source()?;
        let location = Arc::new(ConfiguredLocation::new(self.config.location));
        let mut screen = ExploreScreen::new(
            ListingsFeed::new(source),
            location,
            self.config.categories.clone(),
            PriceFormat::new(self.config.currency_symbol.clone()),
        );
        if !self.config.initial_category.is_all() {
            screen.select_category(self.config.initial_category.clone());
        }

        let auth = AuthController::new(self.identity_provider(), session_store());
        drive::ui::run(screen, auth, self.config.theme)
    }

    /// Fetch one category headlessly and print it.
    pub(crate) fn list(self, format: OutputFormat) -> Result<()> {
        let category = self.config.initial_category.clone();
        let mut feed = ListingsFeed::new(self.listing_source()?);
        feed.set_category(category.clone());
        if !feed.wait_until_settled(LIST_TIMEOUT) {
            bail!("timed out waiting for listings of {category}");
        }
        if let Some(error) = &feed.state().error {
            bail!("failed to load listings for {category}: {error}");
        }

        let listings = feed.listings();
        match format {
            OutputFormat::Plain => {
                let price_format = PriceFormat::new(self.config.currency_symbol.clone());
                print_plain(&category, &listings, &price_format);
            }
            OutputFormat::Json => print_json(&category, &listings)?,
        }
        Ok(())
    }

    fn listing_source(&self) -> Result<Arc<dyn ListingSource>> {
        if let Some(path) = &self.config.fixture {
            let source = FixtureSource::open(path)
                .with_context(|| format!("failed to open fixture {}", path.display()))?;
            return Ok(Arc::new(source));
        }
        match &self.config.backend {
            Some(backend) => {
                let source = RestSource::new(backend.clone())
                    .context("failed to build the listings client")?;
                Ok(Arc::new(source))
            }
            None => bail!("no listing source configured"),
        }
    }

    /// The hosted identity service, or the offline stand-in in fixture mode.
    fn identity_provider(&self) -> Arc<dyn IdentityProvider> {
        if self.config.fixture.is_some() {
            return Arc::new(OfflineProvider);
        }
        let Some(backend) = &self.config.backend else {
            return Arc::new(OfflineProvider);
        };
        match GoTrueProvider::new(backend.clone()) {
            Ok(provider) => Arc::new(provider),
            Err(err) => {
                warn!("identity service unavailable: {err}");
                Arc::new(OfflineProvider)
            }
        }
    }
}

/// The session cache lives in the data directory; without one, sessions last
/// for the current run only.
fn session_store() -> SessionStore {
    match app_dirs::get_data_dir() {
        Ok(dir) => SessionStore::in_dir(&dir),
        Err(err) => {
            warn!("session will not be remembered: {err}");
            SessionStore::ephemeral()
        }
    }
}
