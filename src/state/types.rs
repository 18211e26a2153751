//! Wire-level record types returned by the character catalog API.

use std::fmt;

/// Life status of a character as reported by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Status {
    /// Character is alive.
    Alive,
    /// Character is dead.
    Dead,
    /// Status is not known to the catalog.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Status {
    /// What: Return the exact string the API uses for this status.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - `"Alive"`, `"Dead"` or `"unknown"`.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Named reference to a location embedded in a character record.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LocationRef {
    /// Location name (may be `"unknown"`).
    #[serde(default)]
    pub name: String,
    /// API URL of the location; empty when the catalog has none.
    #[serde(default)]
    pub url: String,
}

/// A single catalog character.
///
/// Records are immutable once fetched; `id` is the identity used for
/// de-duplication in the store.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Character {
    /// Unique catalog id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Alive / Dead / unknown.
    pub status: Status,
    /// Species label (e.g. "Human").
    #[serde(default)]
    pub species: String,
    /// Gender label.
    #[serde(default)]
    pub gender: String,
    /// Last known location.
    #[serde(default)]
    pub location: LocationRef,
    /// Episode URLs the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
    /// Avatar image URL.
    #[serde(default)]
    pub image: String,
    /// API URL of this record.
    #[serde(default)]
    pub url: String,
}

impl Character {
    /// Number of episodes the character appears in.
    #[must_use]
    pub const fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

/// A catalog location and the characters last seen there.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Unique catalog id.
    #[serde(default)]
    pub id: u32,
    /// Location name.
    pub name: String,
    /// Character URLs, each ending in the numeric character id.
    #[serde(default)]
    pub residents: Vec<String>,
}

/// Pagination block shared by every list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageInfo {
    /// Total number of matching records across all pages.
    #[serde(default)]
    pub count: u32,
    /// Total number of pages.
    #[serde(default)]
    pub pages: u32,
    /// URL of the next page, `None` on the last page.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, `None` on the first page.
    #[serde(default)]
    pub prev: Option<String>,
}

/// One page of the `character` list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CharacterPage {
    /// Pagination metadata.
    #[serde(default)]
    pub info: PageInfo,
    /// Records on this page.
    #[serde(default)]
    pub results: Vec<Character>,
}

/// One page of the `location` list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LocationPage {
    /// Pagination metadata.
    #[serde(default)]
    pub info: PageInfo,
    /// Locations on this page.
    #[serde(default)]
    pub results: Vec<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Decode a character page as served by the API
    ///
    /// - Input: JSON with one full record and `next` link
    /// - Output: Status mapped from lowercase `unknown`, episodes counted
    fn decode_character_page() {
        let body = r#"{
            "info": {"count": 826, "pages": 42, "next": "https://x/api/character?page=2", "prev": null},
            "results": [{
                "id": 8, "name": "Adjudicator Rick", "status": "unknown",
                "species": "Human", "type": "", "gender": "Male",
                "origin": {"name": "unknown", "url": ""},
                "location": {"name": "Citadel of Ricks", "url": "https://x/api/location/3"},
                "image": "https://x/avatar/8.jpeg",
                "episode": ["https://x/api/episode/28"],
                "url": "https://x/api/character/8", "created": "2017-11-04T20:03:34.737Z"
            }]
        }"#;
        let page: CharacterPage = serde_json::from_str(body).expect("valid page");
        assert_eq!(page.info.pages, 42);
        assert_eq!(page.info.next.as_deref(), Some("https://x/api/character?page=2"));
        let c = &page.results[0];
        assert_eq!(c.status, Status::Unknown);
        assert_eq!(c.location.name, "Citadel of Ricks");
        assert_eq!(c.episode_count(), 1);
    }

    #[test]
    /// What: Status display uses the wire spelling
    ///
    /// - Input: Each status variant
    /// - Output: "Alive", "Dead", "unknown"
    fn status_display_matches_wire() {
        assert_eq!(Status::Alive.to_string(), "Alive");
        assert_eq!(Status::Dead.to_string(), "Dead");
        assert_eq!(Status::Unknown.to_string(), "unknown");
    }
}
