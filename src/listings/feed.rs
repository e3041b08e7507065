use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error};

use super::model::{Category, Listing};
use super::runtime::FetchRuntime;
use super::source::ListingSource;
use super::worker;

/// Shown in place of listings when the fetch worker is no longer running.
pub const WORKER_STOPPED: &str = "listing worker stopped";

/// Loading/error/data state for the current category.
#[derive(Debug, Clone)]
pub struct ListingsState {
    /// Point-in-time snapshot shared by the map and the list.
    pub listings: Arc<[Listing]>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ListingsState {
    fn default() -> Self {
        Self {
            listings: Arc::from(Vec::new()),
            loading: true,
            error: None,
        }
    }
}

/// Owns the listing state for one screen and re-queries on category change.
///
/// Reads run on a background worker. Every request is tagged with an id and
/// only the answer to the most recent request is applied, so a slow response
/// for an old category can never overwrite the state of a newer one.
pub struct ListingsFeed {
    runtime: FetchRuntime,
    state: ListingsState,
    category: Option<Category>,
}

impl Drop for ListingsFeed {
    fn drop(&mut self) {
        self.runtime.shutdown();
    }
}

impl ListingsFeed {
    pub fn new(source: Arc<dyn ListingSource>) -> Self {
        let (tx, rx, latest) = worker::spawn(source);
        Self::with_runtime(FetchRuntime::new(tx, rx, latest))
    }

    pub(crate) fn with_runtime(runtime: FetchRuntime) -> Self {
        Self {
            runtime,
            state: ListingsState::default(),
            category: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ListingsState {
        &self.state
    }

    #[must_use]
    pub fn listings(&self) -> Arc<[Listing]> {
        Arc::clone(&self.state.listings)
    }

    #[must_use]
    pub fn category(&self) -> Option<&Category> {
        self.category.as_ref()
    }

    /// Point the feed at `category`. Returns whether a request was issued.
    ///
    /// Re-selecting the current category only re-queries when the previous
    /// attempt failed.
    pub fn set_category(&mut self, category: Category) -> bool {
        let unchanged = self.category.as_ref() == Some(&category);
        if unchanged && self.runtime.has_issued_request() && self.state.error.is_none() {
            return false;
        }
        self.category = Some(category);
        self.issue();
        true
    }

    /// Re-query the current category unconditionally.
    pub fn refresh(&mut self) {
        if self.category.is_some() {
            self.issue();
        }
    }

    fn issue(&mut self) {
        let Some(category) = self.category.clone() else {
            return;
        };
        self.state.loading = true;
        self.state.error = None;
        if self.runtime.issue(category).is_none() {
            self.fail_worker_stopped();
        }
    }

    fn fail_worker_stopped(&mut self) {
        error!("{WORKER_STOPPED}");
        self.runtime.record_completion();
        self.state.loading = false;
        self.state.listings = Arc::from(Vec::new());
        self.state.error = Some(WORKER_STOPPED.to_string());
    }

    /// Apply any finished fetches. Returns `true` when the state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.runtime.try_recv() {
                Ok(result) => {
                    if !self.runtime.matches_latest(result.id) {
                        debug!(
                            "discarding stale listings for category {} (#{})",
                            result.category, result.id
                        );
                        continue;
                    }
                    self.runtime.record_completion();
                    self.state.loading = false;
                    match result.outcome {
                        Ok(listings) => {
                            self.state.listings = Arc::from(listings);
                            self.state.error = None;
                        }
                        Err(message) => {
                            self.state.listings = Arc::from(Vec::new());
                            self.state.error = Some(message);
                        }
                    }
                    changed = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.runtime.is_in_flight() {
                        self.fail_worker_stopped();
                        changed = true;
                    }
                    break;
                }
            }
        }
        changed
    }

    /// Block until the latest request resolves or `timeout` elapses.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if !self.runtime.is_in_flight() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicU64;
    use std::sync::mpsc::{self, Receiver};

    use serde_json::json;

    use super::*;
    use crate::listings::commands::FetchResult;
    use crate::listings::model::ListingRow;
    use crate::listings::query::ListingQuery;
    use crate::listings::source::{FetchError, FixtureSource};

    fn rows() -> Vec<ListingRow> {
        serde_json::from_value(json!([
            {"id": 1, "name": "Ranger", "car_type": "SUV", "price": 50, "latitude": 37.3, "longitude": -122.0},
            {"id": 2, "name": "Corolla", "car_type": "Sedan", "price": 40},
            {"id": 3, "name": "Outback", "car_type": "SUV", "price": 65},
        ]))
        .unwrap()
    }

    fn fixture_feed() -> ListingsFeed {
        ListingsFeed::new(Arc::new(FixtureSource::from_rows(rows())))
    }

    struct FailingSource;

    impl ListingSource for FailingSource {
        fn select(&self, _query: &ListingQuery) -> Result<Vec<ListingRow>, FetchError> {
            Err(FetchError::Network("network error".into()))
        }
    }

    /// Blocks reads for one category until the test opens the gate.
    struct GatedSource {
        gated: &'static str,
        gate: Mutex<Receiver<()>>,
        inner: FixtureSource,
    }

    impl ListingSource for GatedSource {
        fn select(&self, query: &ListingQuery) -> Result<Vec<ListingRow>, FetchError> {
            if query.category.as_deref() == Some(self.gated) {
                let gate = self.gate.lock().expect("gate lock");
                let _ = gate.recv();
            }
            self.inner.select(query)
        }
    }

    #[test]
    fn category_change_sets_loading_before_the_fetch_resolves() {
        let mut feed = fixture_feed();
        assert!(feed.set_category(Category::from("SUV")));
        assert!(feed.state().loading);

        assert!(feed.wait_until_settled(Duration::from_secs(1)));
        let state = feed.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.listings.len(), 2);
    }

    #[test]
    fn failure_clears_the_snapshot_and_reports_the_message() {
        let mut feed = ListingsFeed::new(Arc::new(FailingSource));
        feed.set_category(Category::all());
        assert!(feed.state().loading);
        assert!(feed.wait_until_settled(Duration::from_secs(1)));

        let state = feed.state();
        assert!(!state.loading);
        assert!(state.listings.is_empty());
        assert_eq!(state.error.as_deref(), Some("network error"));
    }

    #[test]
    fn failed_snapshot_replaces_previous_listings() {
        let (tx, _command_rx) = mpsc::channel();
        let (result_tx, rx) = mpsc::channel();
        let runtime = FetchRuntime::new(tx, rx, Arc::new(AtomicU64::new(0)));
        let mut feed = ListingsFeed::with_runtime(runtime);

        feed.set_category(Category::all());
        result_tx
            .send(FetchResult {
                id: 1,
                category: Category::all(),
                outcome: Ok(vec![Listing::new(1u64, "Ranger", "SUV")]),
            })
            .unwrap();
        assert!(feed.pump());
        assert_eq!(feed.state().listings.len(), 1);

        feed.refresh();
        result_tx
            .send(FetchResult {
                id: 2,
                category: Category::all(),
                outcome: Err("network error".into()),
            })
            .unwrap();
        assert!(feed.pump());
        assert!(feed.state().listings.is_empty());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let (tx, _command_rx) = mpsc::channel();
        let (result_tx, rx) = mpsc::channel();
        let runtime = FetchRuntime::new(tx, rx, Arc::new(AtomicU64::new(0)));
        let mut feed = ListingsFeed::with_runtime(runtime);

        feed.set_category(Category::from("Sedan"));
        feed.set_category(Category::from("SUV"));

        // The Sedan answer arrives after the SUV request was issued.
        result_tx
            .send(FetchResult {
                id: 1,
                category: Category::from("Sedan"),
                outcome: Ok(vec![Listing::new(2u64, "Corolla", "Sedan")]),
            })
            .unwrap();
        assert!(!feed.pump());
        assert!(feed.state().loading);
        assert!(feed.state().listings.is_empty());

        result_tx
            .send(FetchResult {
                id: 2,
                category: Category::from("SUV"),
                outcome: Ok(vec![Listing::new(1u64, "Ranger", "SUV")]),
            })
            .unwrap();
        assert!(feed.pump());
        assert!(!feed.state().loading);
        assert_eq!(feed.state().listings[0].category.as_str(), "SUV");
    }

    #[test]
    fn slow_old_category_never_overwrites_the_new_one() {
        let (gate_tx, gate_rx) = mpsc::channel();
        let source = GatedSource {
            gated: "Sedan",
            gate: Mutex::new(gate_rx),
            inner: FixtureSource::from_rows(rows()),
        };
        let mut feed = ListingsFeed::new(Arc::new(source));

        feed.set_category(Category::from("Sedan"));
        feed.set_category(Category::from("SUV"));
        gate_tx.send(()).unwrap();

        assert!(feed.wait_until_settled(Duration::from_secs(1)));
        let state = feed.state();
        assert!(!state.loading);
        assert!(
            state
                .listings
                .iter()
                .all(|listing| listing.category.as_str() == "SUV")
        );
        assert_eq!(state.listings.len(), 2);
    }

    #[test]
    fn a_dead_worker_ends_loading_with_an_error() {
        let (tx, _command_rx) = mpsc::channel();
        let (result_tx, rx) = mpsc::channel::<FetchResult>();
        let runtime = FetchRuntime::new(tx, rx, Arc::new(AtomicU64::new(0)));
        let mut feed = ListingsFeed::with_runtime(runtime);

        feed.set_category(Category::all());
        assert!(feed.state().loading);
        drop(result_tx);

        assert!(feed.pump());
        let state = feed.state();
        assert!(!state.loading);
        assert!(state.listings.is_empty());
        assert_eq!(state.error.as_deref(), Some(WORKER_STOPPED));
        assert!(feed.wait_until_settled(Duration::from_millis(50)));
        assert!(!feed.pump());
    }

    #[test]
    fn requests_to_a_dead_worker_fail_at_once() {
        let (tx, command_rx) = mpsc::channel();
        let (_result_tx, rx) = mpsc::channel();
        drop(command_rx);
        let mut feed = ListingsFeed::with_runtime(FetchRuntime::new(
            tx,
            rx,
            Arc::new(AtomicU64::new(0)),
        ));

        assert!(feed.set_category(Category::from("SUV")));
        assert!(!feed.state().loading);
        assert_eq!(feed.state().error.as_deref(), Some(WORKER_STOPPED));
    }

    #[test]
    fn reselecting_a_loaded_category_is_a_no_op() {
        let mut feed = fixture_feed();
        feed.set_category(Category::all());
        feed.wait_until_settled(Duration::from_secs(1));
        assert!(!feed.set_category(Category::all()));
        assert!(!feed.state().loading);
    }

    #[test]
    fn reselecting_a_failed_category_retries() {
        let mut feed = ListingsFeed::new(Arc::new(FailingSource));
        feed.set_category(Category::all());
        feed.wait_until_settled(Duration::from_secs(1));
        assert!(feed.set_category(Category::all()));
        assert!(feed.state().loading);
        assert!(feed.state().error.is_none());
    }
}
