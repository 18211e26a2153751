//! Remote catalog access: the client seam used by the fetchers and its HTTP implementation.

use async_trait::async_trait;

use crate::logic::filter::StatusFilter;
use crate::state::{Character, CharacterPage, Location};
use crate::util::percent_encode;

mod http;

pub use http::HttpCatalog;

/// Result type alias for catalog requests.
pub type Result<T> = std::result::Result<T, FetchError>;

/// What: Failure of a single catalog request.
///
/// Details:
/// - `NotFound` is the API's "no matching resources" sentinel (HTTP 404) and
///   is recovered as an empty result by the fetchers.
/// - Every other variant is surfaced to the user through its `Display` text.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The API answered 404.
    #[error("Nothing found at {url}")]
    NotFound {
        /// Requested URL.
        url: String,
    },
    /// The API answered with another non-success status.
    #[error("Request to {url} failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(String),
    /// Response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// `true` for the 404 sentinel.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// What: Query parameters for the character list endpoint.
///
/// Details:
/// - Blank `name` and `StatusFilter::All` are omitted from the query string.
/// - A non-blank `name` is sent as given, surrounding spaces included.
/// - `page: None` requests the first page without an explicit `page` parameter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterQuery {
    /// Page to request.
    pub page: Option<u32>,
    /// Name substring.
    pub name: String,
    /// Status constraint.
    pub status: StatusFilter,
}

impl CharacterQuery {
    /// What: Render the query string (without the leading `?`).
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - `page=..&name=..&status=..` with only the parameters that are set, values percent-encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(page) = self.page {
            parts.push(format!("page={page}"));
        }
        if !self.name.trim().is_empty() {
            parts.push(format!("name={}", percent_encode(&self.name)));
        }
        if let Some(status) = self.status.as_query() {
            parts.push(format!("status={status}"));
        }
        parts.join("&")
    }
}

/// What: Read-only access to the character catalog.
///
/// Details:
/// - Implemented over HTTP by [`HttpCatalog`]; tests substitute fakes.
/// - 404 responses must be reported as [`FetchError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch one page of the character list for `query`.
    async fn character_page(&self, query: &CharacterQuery) -> Result<CharacterPage>;

    /// Fetch a character page by absolute URL, as given by `info.next`.
    async fn character_page_at(&self, url: &str) -> Result<CharacterPage>;

    /// Look up characters by id; the caller keeps each call to at most 20 ids.
    async fn characters_by_ids(&self, ids: &[u32]) -> Result<Vec<Character>>;

    /// Find locations whose name contains `name`.
    async fn search_locations(&self, name: &str) -> Result<Vec<Location>>;
}

#[async_trait]
impl<T: CatalogClient + ?Sized> CatalogClient for &T {
    async fn character_page(&self, query: &CharacterQuery) -> Result<CharacterPage> {
        (**self).character_page(query).await
    }

    async fn character_page_at(&self, url: &str) -> Result<CharacterPage> {
        (**self).character_page_at(url).await
    }

    async fn characters_by_ids(&self, ids: &[u32]) -> Result<Vec<Character>> {
        (**self).characters_by_ids(ids).await
    }

    async fn search_locations(&self, name: &str) -> Result<Vec<Location>> {
        (**self).search_locations(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Status;

    #[test]
    /// What: Only set parameters appear and values are encoded
    ///
    /// - Input: page 2, name "Rick Sanchez", status Dead; then name " Smith" and "  "
    /// - Output: `page=2&name=Rick%20Sanchez&status=Dead`; leading space kept; blank omitted
    fn query_string_includes_set_params() {
        let q = CharacterQuery {
            page: Some(2),
            name: "Rick Sanchez".into(),
            status: StatusFilter::Only(Status::Dead),
        };
        assert_eq!(q.to_query_string(), "page=2&name=Rick%20Sanchez&status=Dead");

        let spaced = CharacterQuery {
            name: " Smith".into(),
            ..CharacterQuery::default()
        };
        assert_eq!(spaced.to_query_string(), "name=%20Smith");

        let blank = CharacterQuery {
            name: "  ".into(),
            ..CharacterQuery::default()
        };
        assert_eq!(blank.to_query_string(), "");
    }

    #[test]
    /// What: Default query renders as empty
    ///
    /// - Input: `CharacterQuery::default()`
    /// - Output: Empty string
    fn query_string_empty_by_default() {
        assert_eq!(CharacterQuery::default().to_query_string(), "");
    }

    #[test]
    /// What: Only the 404 variant is the not-found sentinel
    ///
    /// - Input: NotFound and Status(500)
    /// - Output: true then false; messages are readable
    fn not_found_is_distinguished() {
        let nf = FetchError::NotFound { url: "u".into() };
        let other = FetchError::Status {
            status: 500,
            url: "u".into(),
        };
        assert!(nf.is_not_found());
        assert!(!other.is_not_found());
        assert_eq!(other.to_string(), "Request to u failed with status 500");
    }
}
