//! Fetch orchestration: pulling characters from the catalog into the store.
//!
//! Two independent fetchers exist and the caller picks one through
//! [`FetchMode`]:
//! - [`PagedFetcher`] keeps server-side pagination and loads one API page per call.
//! - [`DrainFetcher`] loads the complete result set (every page, or every
//!   resident of the matching locations) so local filtering and sorting see
//!   all records.
//!
//! Neither fetcher returns errors. A 404 from the catalog is an empty result;
//! anything else is recorded in [`FetchStatus::error`] and the store is left
//! as it was.

use std::fmt;
use std::str::FromStr;

use crate::state::Character;

mod drain;
mod paged;

pub use drain::DrainFetcher;
pub use paged::PagedFetcher;

/// Number of characters shown per page when the page count is computed locally.
pub const PAGE_SIZE: usize = 24;

/// Maximum number of ids per multi-id lookup request.
pub const ID_BATCH_SIZE: usize = 20;

/// Which fetcher drives the view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// One server page per request ([`PagedFetcher`]).
    Paged,
    /// Full result set, paginated locally ([`DrainFetcher`]).
    #[default]
    Drain,
}

impl FromStr for FetchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paged" | "page" => Ok(Self::Paged),
            "drain" | "all" => Ok(Self::Drain),
            other => Err(format!("unknown fetch mode '{other}' (expected paged or drain)")),
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Paged => "paged",
            Self::Drain => "drain",
        })
    }
}

/// Outcome of the most recent fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchStatus {
    /// Readable message of the last failed fetch, cleared when a new fetch starts.
    pub error: Option<String>,
}

impl FetchStatus {
    /// Forget the previous outcome before a new fetch.
    pub(crate) fn begin(&mut self) {
        self.error = None;
    }

    /// Record the outcome of a finished fetch.
    pub(crate) fn finish(&mut self, error: Option<String>) {
        self.error = error;
    }
}

/// What: Number of local pages needed for `count` characters.
///
/// Inputs:
/// - `count`: Number of characters
///
/// Output:
/// - `ceil(count / PAGE_SIZE)`; 0 for an empty list.
#[must_use]
pub fn pages_for(count: usize) -> u32 {
    u32::try_from(count.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
}

/// What: Slice of `items` shown on local page `page`.
///
/// Inputs:
/// - `items`: Full (drained) character list
/// - `page`: 1-based page; 0 is treated as 1
///
/// Output:
/// - Up to `PAGE_SIZE` characters; empty when `page` is past the end.
#[must_use]
pub fn page_window(items: &[Character], page: u32) -> &[Character] {
    let index = usize::try_from(page.max(1) - 1).unwrap_or(usize::MAX);
    let start = index.saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}
