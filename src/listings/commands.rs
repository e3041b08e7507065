use super::model::{Category, Listing};

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub(crate) enum FetchCommand {
    /// Read the listings for a category.
    Fetch {
        /// Identifier that lets the feed correlate the response with its request.
        id: u64,
        category: Category,
    },
    /// Stop the background worker thread.
    Shutdown,
}

/// Completion of one fetch, tagged with the request that produced it.
#[derive(Debug)]
pub(crate) struct FetchResult {
    pub id: u64,
    pub category: Category,
    pub outcome: Result<Vec<Listing>, String>,
}
