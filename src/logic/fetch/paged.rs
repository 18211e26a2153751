//! Page-at-a-time fetcher that mirrors the API's own pagination.

use tracing::{info, warn};

use super::FetchStatus;
use crate::logic::filter::Criteria;
use crate::sources::{CatalogClient, CharacterQuery};
use crate::state::{SharedStore, lock_store};

/// What: Loads one API page per call into the shared store.
///
/// Inputs:
/// - `client`: Catalog access
/// - `store`: Store receiving the page
///
/// Output: [`fetch_page`](Self::fetch_page) mutates the store and [`status`](Self::status).
///
/// Details:
/// - Name and status are sent to the server; the location filter stays local.
pub struct PagedFetcher<C> {
    /// Catalog access.
    client: C,
    /// Destination store.
    store: SharedStore,
    /// Outcome of the last fetch.
    status: FetchStatus,
}

impl<C: CatalogClient> PagedFetcher<C> {
    /// Create a fetcher writing into `store`.
    pub fn new(client: C, store: SharedStore) -> Self {
        Self {
            client,
            store,
            status: FetchStatus::default(),
        }
    }

    /// Outcome of the last fetch.
    pub const fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// What: Fetch API page `page` and replace or extend the store with it.
    ///
    /// Inputs:
    /// - `criteria`: Name and status are sent as query parameters
    /// - `page`: 1-based API page
    /// - `append`: Extend the store (dedup by id) instead of replacing it
    ///
    /// Output:
    /// - None; see [`status`](Self::status) for the outcome.
    ///
    /// Details:
    /// - On success the server's `info.pages` becomes the store's total page count.
    /// - A 404 empties the store (page 1, zero pages) unless appending, in
    ///   which case the store is left unchanged.
    /// - Any other failure leaves the store untouched and records the message.
    pub async fn fetch_page(&mut self, criteria: &Criteria, page: u32, append: bool) {
        self.status.begin();
        let query = CharacterQuery {
            page: Some(page),
            name: criteria.name.clone(),
            status: criteria.status,
        };
        let error = match self.client.character_page(&query).await {
            Ok(resp) => {
                let total_pages = resp.info.pages;
                let received = resp.results.len();
                let mut store = lock_store(&self.store);
                if append {
                    let added = store.append_characters(resp.results, page, total_pages);
                    info!(page, received, added, total_pages, "appended character page");
                } else {
                    store.set_characters(resp.results, page, total_pages);
                    info!(page, received, total_pages, "loaded character page");
                }
                None
            }
            Err(e) if e.is_not_found() => {
                info!(page, append, "no characters match query");
                if !append {
                    lock_store(&self.store).set_characters(Vec::new(), 1, 0);
                }
                None
            }
            Err(e) => {
                warn!(page, error = %e, "character page fetch failed");
                Some(e.to_string())
            }
        };
        self.status.finish(error);
    }
}
