//! Filter criteria and the pure filter-then-sort pass over stored characters.

use std::str::FromStr;

use crate::logic::sort::{SortDir, SortKey, sort_characters};
use crate::state::{Character, Status};

/// Status constraint applied to the character list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status constraint.
    #[default]
    All,
    /// Keep only characters with exactly this status.
    Only(Status),
}

impl StatusFilter {
    /// What: Check whether a character passes this filter.
    ///
    /// Inputs:
    /// - `status`: Character status
    ///
    /// Output:
    /// - `true` for `All`, exact equality otherwise.
    #[must_use]
    pub fn matches(self, status: Status) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// Wire value to send as the `status` query parameter, `None` for `All`.
    #[must_use]
    pub const fn as_query(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Only(s) => Some(s.as_wire()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "alive" => Ok(Self::Only(Status::Alive)),
            "dead" => Ok(Self::Only(Status::Dead)),
            "unknown" => Ok(Self::Only(Status::Unknown)),
            other => Err(format!(
                "unknown status '{other}' (expected All, Alive, Dead or unknown)"
            )),
        }
    }
}

/// What: Filter and sort parameters owned by whichever view needs them.
///
/// Inputs: Built by the caller (CLI arguments, settings defaults).
///
/// Output: Consumed by [`apply`] and by the fetchers for their query parameters.
///
/// Details:
/// - Empty `name`/`location` strings mean "no filter".
/// - `sort: None` keeps the fetched order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive name substring.
    pub name: String,
    /// Status constraint.
    pub status: StatusFilter,
    /// Case-insensitive substring of the character's location name.
    pub location: String,
    /// Sort field, if any.
    pub sort: Option<SortKey>,
    /// Sort direction.
    pub direction: SortDir,
}

impl Criteria {
    /// What: Copy of these criteria without the local location filter.
    ///
    /// Inputs: None
    ///
    /// Output:
    /// - Same criteria with `location` cleared.
    ///
    /// Details:
    /// - Used after the drain fetcher resolved the location through the
    ///   location endpoint; residents are not re-filtered by current location.
    #[must_use]
    pub fn for_server_resolved_location(&self) -> Self {
        Self {
            location: String::new(),
            ..self.clone()
        }
    }
}

/// What: Case-insensitive substring test.
///
/// Inputs:
/// - `haystack`: Text to search
/// - `needle_lower`: Already lowercased needle
///
/// Output:
/// - `true` if `needle_lower` occurs in `haystack` ignoring case.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Lowercased filter text, `None` when the filter is blank.
fn needle(filter: &str) -> Option<String> {
    (!filter.trim().is_empty()).then(|| filter.to_lowercase())
}

/// What: Apply name, status and location filters, then sort.
///
/// Inputs:
/// - `items`: Characters as held by the store
/// - `criteria`: Filter and sort parameters
///
/// Output:
/// - New vector with matching characters in display order; `items` is untouched.
///
/// Details:
/// - Filters run in order: name, status, location.
/// - A blank filter is skipped; otherwise its text is matched as given,
///   surrounding spaces included.
/// - The sort is stable, so ties keep store order.
#[must_use]
pub fn apply(items: &[Character], criteria: &Criteria) -> Vec<Character> {
    let name = needle(&criteria.name);
    let location = needle(&criteria.location);
    let mut out: Vec<Character> = items
        .iter()
        .filter(|c| name.as_deref().is_none_or(|n| contains_ci(&c.name, n)))
        .filter(|c| criteria.status.matches(c.status))
        .filter(|c| {
            location
                .as_deref()
                .is_none_or(|l| contains_ci(&c.location.name, l))
        })
        .cloned()
        .collect();
    if let Some(key) = criteria.sort {
        sort_characters(&mut out, key, criteria.direction);
    }
    out
}
