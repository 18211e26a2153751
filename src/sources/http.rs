//! `reqwest`-backed implementation of [`CatalogClient`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use super::{CatalogClient, CharacterQuery, FetchError, Result};
use crate::state::{Character, CharacterPage, Location, LocationPage};
use crate::util::percent_encode;

/// Body of the multi-id lookup endpoint: one id returns an object, several return an array.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    /// Array response.
    Many(Vec<Character>),
    /// Single-object response.
    One(Box<Character>),
}

impl OneOrMany {
    /// Flatten either shape into a vector.
    fn into_vec(self) -> Vec<Character> {
        match self {
            Self::Many(v) => v,
            Self::One(c) => vec![*c],
        }
    }
}

/// What: HTTP client for the public character catalog.
///
/// Inputs:
/// - `base_url`: API root such as `https://rickandmortyapi.com/api`
/// - `timeout`: Per-request timeout, `None` to wait indefinitely
///
/// Output: Implements [`CatalogClient`].
///
/// Details:
/// - Requests are plain GETs; 404 becomes [`FetchError::NotFound`].
#[derive(Clone, Debug)]
pub struct HttpCatalog {
    /// Shared connection pool.
    client: reqwest::Client,
    /// API root without trailing slash.
    base_url: String,
}

impl HttpCatalog {
    /// What: Build a catalog client.
    ///
    /// Inputs:
    /// - `base_url`: API root (a trailing `/` is tolerated)
    /// - `timeout`: Optional per-request timeout
    ///
    /// Output:
    /// - Ready client.
    ///
    /// # Errors
    /// - [`FetchError::Client`] when the underlying HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("ramdex/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the character list endpoint for `query`.
    #[must_use]
    pub fn character_list_url(&self, query: &CharacterQuery) -> String {
        let qs = query.to_query_string();
        if qs.is_empty() {
            format!("{}/character", self.base_url)
        } else {
            format!("{}/character?{qs}", self.base_url)
        }
    }

    /// URL of the multi-id lookup endpoint, ids comma-joined.
    #[must_use]
    pub fn characters_by_ids_url(&self, ids: &[u32]) -> String {
        let joined = ids
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}/character/{joined}", self.base_url)
    }

    /// URL of the location search endpoint for `name`.
    #[must_use]
    pub fn location_search_url(&self, name: &str) -> String {
        format!(
            "{}/location?name={}",
            self.base_url,
            percent_encode(name)
        )
    }

    /// What: GET `url` and decode the JSON body.
    ///
    /// Inputs:
    /// - `url`: Absolute URL
    ///
    /// Output:
    /// - Decoded body.
    ///
    /// # Errors
    /// - `NotFound` on 404, `Status` on other non-success codes
    /// - `Network` on transport failures, `Decode` on malformed JSON
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url = %url, "catalog GET");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            info!(url = %url, "catalog returned 404");
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %url, "catalog returned non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read response: {e}")))?;
        decode_json(&body)
    }
}

/// What: Decode a JSON body into `T`.
///
/// Inputs:
/// - `body`: Raw response text
///
/// Output:
/// - Decoded value.
///
/// # Errors
/// - [`FetchError::Decode`] when the body does not match `T`
fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl CatalogClient for HttpCatalog {
    async fn character_page(&self, query: &CharacterQuery) -> Result<CharacterPage> {
        let url = self.character_list_url(query);
        self.get_json(&url).await
    }

    async fn character_page_at(&self, url: &str) -> Result<CharacterPage> {
        self.get_json(url).await
    }

    async fn characters_by_ids(&self, ids: &[u32]) -> Result<Vec<Character>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.characters_by_ids_url(ids);
        let body: OneOrMany = self.get_json(&url).await?;
        Ok(body.into_vec())
    }

    async fn search_locations(&self, name: &str) -> Result<Vec<Location>> {
        let url = self.location_search_url(name);
        let page: LocationPage = self.get_json(&url).await?;
        Ok(page.results)
    }
}
