//! Read access to the hosted listings table.
//!
//! [`ListingSource`] is the seam the feed worker talks to. [`RestSource`]
//! speaks PostgREST over a blocking `reqwest` client; [`FixtureSource`] serves
//! rows from a local JSON file with the same filtering rules.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, InvalidHeaderValue};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use super::model::{Listing, ListingRow};
use super::query::{DEFAULT_TABLE, ListingQuery};

/// Failure of a single read query. The display text is what the list shows.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("could not decode listings: {0}")]
    Decode(String),
    #[error("could not read fixture {path}: {reason}")]
    Fixture { path: PathBuf, reason: String },
}

/// Anything that can answer a [`ListingQuery`].
pub trait ListingSource: Send + Sync {
    fn select(&self, query: &ListingQuery) -> Result<Vec<ListingRow>, FetchError>;
}

/// Connection details for the hosted store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: Url,
    pub anon_key: String,
    pub table: String,
}

impl BackendConfig {
    pub fn new(url: Url, anon_key: impl Into<String>) -> Self {
        Self {
            url,
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Join a path below the service root, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{}", path.trim_start_matches('/')))
    }
}

/// PostgREST-backed listing reads.
pub struct RestSource {
    client: Client,
    backend: BackendConfig,
}

impl RestSource {
    /// Build the client once at startup; callers share it through an `Arc`.
    pub fn new(backend: BackendConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(None)
            .default_headers(api_headers(&backend.anon_key)?)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self { client, backend })
    }
}

/// Headers every request to the hosted services carries.
pub(crate) fn api_headers(anon_key: &str) -> Result<HeaderMap, FetchError> {
    let invalid = |_: InvalidHeaderValue| {
        FetchError::Network("anon key contains invalid header characters".into())
    };
    let mut headers = HeaderMap::new();
    headers.insert("apikey", HeaderValue::from_str(anon_key).map_err(invalid)?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {anon_key}")).map_err(invalid)?,
    );
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: Option<String>,
}

/// Prefer the service's `message` field, fall back to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<RestErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .unwrap_or_else(|| body.trim().to_string())
}

impl ListingSource for RestSource {
    fn select(&self, query: &ListingQuery) -> Result<Vec<ListingRow>, FetchError> {
        let url = self
            .backend
            .endpoint(&format!("rest/v1/{}", self.backend.table))
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let response = self
            .client
            .get(url)
            .query(&query.params())
            .send()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }
}

/// Rows loaded once from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    rows: Vec<ListingRow>,
}

impl FixtureSource {
    pub fn open(path: &Path) -> Result<Self, FetchError> {
        let fixture_error = |reason: String| FetchError::Fixture {
            path: path.to_path_buf(),
            reason,
        };
        let contents = fs::read_to_string(path).map_err(|err| fixture_error(err.to_string()))?;
        let rows = serde_json::from_str(&contents).map_err(|err| fixture_error(err.to_string()))?;
        Ok(Self { rows })
    }

    #[must_use]
    pub fn from_rows(rows: Vec<ListingRow>) -> Self {
        Self { rows }
    }
}

impl ListingSource for FixtureSource {
    fn select(&self, query: &ListingQuery) -> Result<Vec<ListingRow>, FetchError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| query.matches(row.car_type()))
            .cloned()
            .collect())
    }
}

/// Convert wire rows into listings, dropping rows that cannot be represented.
pub fn decode_rows(rows: Vec<ListingRow>) -> Vec<Listing> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match Listing::try_from(row) {
            Ok(listing) => Some(listing),
            Err(err) => {
                warn!("dropping listing row {index}: {err}");
                None
            }
        })
        .collect()
}
