//! Catalog logic: local filtering and sorting, and the fetchers that fill the store.

pub mod fetch;
pub mod filter;
pub mod sort;

pub use fetch::{DrainFetcher, FetchMode, FetchStatus, PagedFetcher, page_window, pages_for};
pub use filter::{Criteria, StatusFilter, apply};
pub use sort::{SortDir, SortKey, sort_characters};
