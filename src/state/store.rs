//! Character store holding the currently loaded characters and page metadata.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::state::types::Character;

/// What: In-memory list of characters plus page bookkeeping.
///
/// Inputs: None (constructed empty).
///
/// Output: Mutated only through [`set_characters`](Self::set_characters),
/// [`append_characters`](Self::append_characters) and [`clear`](Self::clear).
///
/// Details:
/// - `current_page` is 1-based; `total_pages` starts at 0.
/// - After any append no two records share an id. `set_characters` trusts the
///   caller's list verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterStore {
    /// Loaded characters in display order.
    characters: Vec<Character>,
    /// Page the list was fetched for.
    current_page: u32,
    /// Page count reported (or computed) for the current query.
    total_pages: u32,
}

impl Default for CharacterStore {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            current_page: 1,
            total_pages: 0,
        }
    }
}

impl CharacterStore {
    /// Create an empty store (page 1, zero pages).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Replace the whole list and page metadata.
    ///
    /// Inputs:
    /// - `items`: New character list, stored as-is
    /// - `page`: Current page number
    /// - `total_pages`: Total page count
    ///
    /// Output:
    /// - None; previous contents are discarded.
    pub fn set_characters(&mut self, items: Vec<Character>, page: u32, total_pages: u32) {
        self.characters = items;
        self.current_page = page;
        self.total_pages = total_pages;
    }

    /// What: Append characters whose id is not already present.
    ///
    /// Inputs:
    /// - `items`: Incoming batch (may overlap existing ids or itself)
    /// - `page`: Current page number
    /// - `total_pages`: Total page count
    ///
    /// Output:
    /// - Number of characters actually appended.
    ///
    /// Details:
    /// - Page metadata is overwritten even when nothing was appended.
    /// - Duplicates inside `items` are also dropped after their first occurrence.
    pub fn append_characters(&mut self, items: Vec<Character>, page: u32, total_pages: u32) -> usize {
        let mut seen: HashSet<u32> = self.characters.iter().map(|c| c.id).collect();
        let before = self.characters.len();
        self.characters
            .extend(items.into_iter().filter(|c| seen.insert(c.id)));
        self.current_page = page;
        self.total_pages = total_pages;
        self.characters.len() - before
    }

    /// Reset to the empty initial state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Loaded characters.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Total page count.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }
}

/// Store shared between the fetch orchestrators and any readers.
pub type SharedStore = Arc<Mutex<CharacterStore>>;

/// Create a fresh [`SharedStore`].
#[must_use]
pub fn shared_store() -> SharedStore {
    Arc::new(Mutex::new(CharacterStore::new()))
}

/// What: Lock the shared store, recovering from a poisoned mutex.
///
/// Inputs:
/// - `store`: Shared store handle
///
/// Output:
/// - Guard over the store contents.
///
/// Details:
/// - Store mutations are total, so a panic elsewhere cannot leave it half-written.
/// - Callers must not hold the guard across an `.await`.
pub fn lock_store(store: &SharedStore) -> MutexGuard<'_, CharacterStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clone the current store state for a reader.
#[must_use]
pub fn snapshot(store: &SharedStore) -> CharacterStore {
    lock_store(store).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::character;

    fn ids(store: &CharacterStore) -> Vec<u32> {
        store.characters().iter().map(|c| c.id).collect()
    }

    #[test]
    /// What: Append drops ids already present and duplicates inside the batch
    ///
    /// - Input: Store with ids 1,2; append 2,3,3,4
    /// - Output: ids 1,2,3,4; two appended
    fn append_dedups_by_id() {
        let mut store = CharacterStore::new();
        store.set_characters(vec![character(1, "Rick"), character(2, "Morty")], 1, 5);
        let added = store.append_characters(
            vec![
                character(2, "Morty again"),
                character(3, "Summer"),
                character(3, "Summer again"),
                character(4, "Beth"),
            ],
            2,
            5,
        );
        assert_eq!(added, 2);
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);
        assert_eq!(store.characters()[1].name, "Morty");
        assert_eq!(store.current_page(), 2);
    }

    #[test]
    /// What: Page metadata is overwritten even if nothing was appended
    ///
    /// - Input: Append only already-present ids with new page values
    /// - Output: List unchanged, page/total replaced
    fn append_overwrites_page_metadata() {
        let mut store = CharacterStore::new();
        store.set_characters(vec![character(1, "Rick")], 1, 3);
        let added = store.append_characters(vec![character(1, "Rick")], 7, 9);
        assert_eq!(added, 0);
        assert_eq!(ids(&store), vec![1]);
        assert_eq!((store.current_page(), store.total_pages()), (7, 9));
    }

    #[test]
    /// What: Set stores the list verbatim, including duplicate ids
    ///
    /// - Input: Two records with id 5
    /// - Output: Both kept
    fn set_trusts_caller_list() {
        let mut store = CharacterStore::new();
        store.set_characters(vec![character(5, "A"), character(5, "B")], 2, 4);
        assert_eq!(ids(&store), vec![5, 5]);
    }

    #[test]
    /// What: Empty set and clear both produce the initial state
    ///
    /// - Input: Populated store, then `set_characters([], 1, 0)` and `clear()`
    /// - Output: Empty list, page 1, zero pages
    fn set_empty_and_clear_reset() {
        let mut store = CharacterStore::new();
        store.set_characters(vec![character(1, "Rick")], 3, 4);
        store.set_characters(Vec::new(), 1, 0);
        assert_eq!(store, CharacterStore::default());

        store.set_characters(vec![character(1, "Rick")], 3, 4);
        store.clear();
        assert!(store.characters().is_empty());
        assert_eq!((store.current_page(), store.total_pages()), (1, 0));
    }

    #[test]
    /// What: Snapshot reflects writes made through the shared handle
    ///
    /// - Input: Shared store written via `lock_store`
    /// - Output: Snapshot contains the written record
    fn shared_snapshot_sees_writes() {
        let store = shared_store();
        lock_store(&store).set_characters(vec![character(9, "Squanchy")], 1, 1);
        let snap = snapshot(&store);
        assert_eq!(ids(&snap), vec![9]);
    }
}
