use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, info, warn};

use super::commands::{FetchCommand, FetchResult};
use super::query::ListingQuery;
use super::source::{ListingSource, decode_rows};

/// Launches the background fetch worker thread and returns communication channels.
pub(crate) fn spawn(
    source: Arc<dyn ListingSource>,
) -> (Sender<FetchCommand>, Receiver<FetchResult>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();
    let latest_request_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_request_id);

    thread::spawn(move || worker_loop(source.as_ref(), command_rx, result_tx, thread_latest));

    (command_tx, result_rx, latest_request_id)
}

fn worker_loop(
    source: &dyn ListingSource,
    command_rx: Receiver<FetchCommand>,
    result_tx: Sender<FetchResult>,
    latest_request_id: Arc<AtomicU64>,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(source, &result_tx, &latest_request_id, command) {
            break;
        }
    }
}

fn handle_command(
    source: &dyn ListingSource,
    result_tx: &Sender<FetchResult>,
    latest_request_id: &AtomicU64,
    command: FetchCommand,
) -> bool {
    match command {
        FetchCommand::Fetch { id, category } => {
            // A newer request was issued while this one sat in the queue.
            if id < latest_request_id.load(Ordering::Acquire) {
                debug!("skipping stale fetch #{id} for category {category}");
                return true;
            }

            info!("fetching listings for category {category} (#{id})");
            let query = ListingQuery::for_category(&category);
            let outcome = match source.select(&query) {
                Ok(rows) => {
                    let listings = decode_rows(rows);
                    info!("fetched {} listings for category {category}", listings.len());
                    Ok(listings)
                }
                Err(err) => {
                    warn!("listing query for category {category} failed: {err}");
                    Err(err.to_string())
                }
            };

            result_tx
                .send(FetchResult {
                    id,
                    category,
                    outcome,
                })
                .is_ok()
        }
        FetchCommand::Shutdown => false,
    }
}
