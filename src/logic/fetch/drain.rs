//! Drain-and-merge fetcher that loads the complete result set for a query.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::{FetchStatus, ID_BATCH_SIZE, pages_for};
use crate::logic::filter::Criteria;
use crate::sources::{CatalogClient, CharacterQuery, Result};
use crate::state::{Character, SharedStore, lock_store};
use crate::util::{dedup_ids, resident_id};

/// What: Loads every matching character before touching the store.
///
/// Inputs:
/// - `client`: Catalog access
/// - `store`: Store receiving the full result set
///
/// Output: [`fetch_page`](Self::fetch_page) replaces the store and updates [`status`](Self::status).
///
/// Details:
/// - With a location filter, characters are the residents of every location
///   whose name contains the filter, looked up in batches of [`ID_BATCH_SIZE`].
/// - Without one, the first list page is requested with name/status and the
///   `info.next` links are followed until exhausted.
/// - The store is written once, after all requests succeeded. Two fetchers
///   sharing a store race: the last completed fetch wins.
pub struct DrainFetcher<C> {
    /// Catalog access.
    client: C,
    /// Destination store.
    store: SharedStore,
    /// Outcome of the last fetch.
    status: FetchStatus,
}

impl<C: CatalogClient> DrainFetcher<C> {
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

    /// What: Load the full result set for `criteria` and replace the store.
    ///
    /// Inputs:
    /// - `criteria`: Name/status for the list path; location selects the residents path
    /// - `page`: Page number recorded in the store on the list path
    ///
    /// Output:
    /// - None; see [`status`](Self::status) for the outcome.
    ///
    /// Details:
    /// - Total pages are `ceil(count / 24)` of the merged list.
    /// - The residents path always records page 1; the list path records
    ///   `page` as given, without checking it against the data.
    /// - A 404 on any request empties the store (page 1, zero pages).
    /// - Any other failure leaves the store untouched and records the message.
    pub async fn fetch_page(&mut self, criteria: &Criteria, page: u32) {
        self.status.begin();
        let location = criteria.location.as_str();
        let result = if location.trim().is_empty() {
            self.drain_list(criteria).await.map(|items| (page, items))
        } else {
            self.collect_residents(location).await.map(|items| (1, items))
        };
        let error = match result {
            Ok((stored_page, items)) => {
                let total_pages = pages_for(items.len());
                info!(
                    count = items.len(),
                    page = stored_page,
                    total_pages,
                    "stored drained characters"
                );
                lock_store(&self.store).set_characters(items, stored_page, total_pages);
                None
            }
            Err(e) if e.is_not_found() => {
                info!(location = %location, name = %criteria.name, "no characters match query");
                lock_store(&self.store).set_characters(Vec::new(), 1, 0);
                None
            }
            Err(e) => {
                warn!(error = %e, "drain fetch failed");
                Some(e.to_string())
            }
        };
        self.status.finish(error);
    }

    /// What: Follow the list endpoint's `next` links and concatenate every page.
    ///
    /// Inputs:
    /// - `criteria`: Name and status for the first request
    ///
    /// Output:
    /// - All characters in page order.
    ///
    /// # Errors
    /// - The first failing request's error
    async fn drain_list(&self, criteria: &Criteria) -> Result<Vec<Character>> {
        let first = CharacterQuery {
            page: None,
            name: criteria.name.clone(),
            status: criteria.status,
        };
        let mut resp = self.client.character_page(&first).await?;
        let mut all: Vec<Character> = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut pages = 1_u32;
        loop {
            all.append(&mut resp.results);
            let Some(next) = resp.info.next.take() else {
                break;
            };
            if !visited.insert(next.clone()) {
                warn!(url = %next, "pagination link repeats; stopping");
                break;
            }
            debug!(url = %next, fetched = all.len(), "following next page");
            resp = self.client.character_page_at(&next).await?;
            pages += 1;
        }
        info!(pages, count = all.len(), "drained character list");
        Ok(all)
    }

    /// What: Resolve locations by name and load all of their residents.
    ///
    /// Inputs:
    /// - `location`: Location name substring
    ///
    /// Output:
    /// - Residents of every matching location, each id once, in first-seen order.
    ///
    /// # Errors
    /// - The location search error or the first failing batch lookup
    async fn collect_residents(&self, location: &str) -> Result<Vec<Character>> {
        let locations = self.client.search_locations(location).await?;
        let ids = dedup_ids(
            locations
                .iter()
                .flat_map(|l| l.residents.iter())
                .filter_map(|url| {
                    let id = resident_id(url);
                    if id.is_none() {
                        debug!(url = %url, "skipping resident without numeric id");
                    }
                    id
                }),
        );
        info!(
            location = %location,
            locations = locations.len(),
            residents = ids.len(),
            "resolved location residents"
        );
        let mut all: Vec<Character> = Vec::with_capacity(ids.len());
        for batch in ids.chunks(ID_BATCH_SIZE) {
            let found = self.client.characters_by_ids(batch).await?;
            debug!(requested = batch.len(), received = found.len(), "resident batch loaded");
            all.extend(found);
        }
        Ok(all)
    }
}
