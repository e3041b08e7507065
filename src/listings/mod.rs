//! Listing data: the typed model, the read query, the sources that answer it
//! and the [`ListingsFeed`] that keeps one category's snapshot current.

mod commands;
mod feed;
pub mod model;
pub mod query;
mod runtime;
pub mod source;
mod worker;

pub use feed::{ListingsFeed, ListingsState, WORKER_STOPPED};
pub use model::{Category, Coordinate, Listing, ListingId, ListingRow, RowError};
pub use query::ListingQuery;
pub use source::{BackendConfig, FetchError, FixtureSource, ListingSource, RestSource, decode_rows};
