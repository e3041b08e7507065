use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::commands::{FetchCommand, FetchResult};
use super::model::Category;

/// UI-side half of the fetch worker: issues tagged requests and recognises
/// which responses still matter.
pub(crate) struct FetchRuntime {
    tx: Sender<FetchCommand>,
    rx: Receiver<FetchResult>,
    latest_request_id: Arc<AtomicU64>,
    next_request_id: u64,
    current_request_id: Option<u64>,
    in_flight: bool,
}

impl FetchRuntime {
    pub(crate) fn new(
        tx: Sender<FetchCommand>,
        rx: Receiver<FetchResult>,
        latest_request_id: Arc<AtomicU64>,
    ) -> Self {
        Self {
            tx,
            rx,
            latest_request_id,
            next_request_id: 0,
            current_request_id: None,
            in_flight: false,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(FetchCommand::Shutdown);
    }

    /// Send a fetch for `category` and make it the only request whose answer counts.
    ///
    /// Returns `None` when the worker is gone and nothing will answer.
    pub(crate) fn issue(&mut self, category: Category) -> Option<u64> {
        self.next_request_id = self.next_request_id.saturating_add(1);
        let id = self.next_request_id;
        self.current_request_id = Some(id);
        self.latest_request_id.store(id, Ordering::Release);
        self.in_flight = self.tx.send(FetchCommand::Fetch { id, category }).is_ok();
        self.in_flight.then_some(id)
    }

    pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
        Some(result_id) == self.current_request_id
    }

    pub(crate) fn record_completion(&mut self) {
        self.in_flight = false;
    }

    pub(crate) fn has_issued_request(&self) -> bool {
        self.current_request_id.is_some()
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn try_recv(&mut self) -> Result<FetchResult, TryRecvError> {
        self.rx.try_recv()
    }
}
