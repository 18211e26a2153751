//! Ordering of character lists by name or episode count.

use std::str::FromStr;

use feruca::Collator;

use crate::state::Character;

/// Field the character list is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    /// Character name, in Unicode collation order.
    Name,
    /// Number of episodes the character appears in.
    Episodes,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "episodes" | "episode" => Ok(Self::Episodes),
            other => Err(format!("unknown sort key '{other}' (expected name or episodes)")),
        }
    }
}

impl FromStr for SortDir {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

/// What: Sort characters in place by `key` and `dir`.
///
/// Inputs:
/// - `items`: Characters to reorder
/// - `key`: Sort field
/// - `dir`: Ascending or descending
///
/// Output:
/// - Reorders `items`; equal elements keep their relative order.
///
/// Details:
/// - Descending reverses the comparison, not the result, so ties stay in
///   input order for both directions.
/// - Descending is honored for episodes as well as names.
/// - Names use the CLDR root collation: accents and case only break ties
///   between otherwise equal letters, and lowercase sorts before uppercase.
pub fn sort_characters(items: &mut [Character], key: SortKey, dir: SortDir) {
    let mut collator = Collator::default();
    let mut cmp = |a: &Character, b: &Character| match key {
        SortKey::Name => collator.collate(a.name.as_str(), b.name.as_str()),
        SortKey::Episodes => a.episode_count().cmp(&b.episode_count()),
    };
    match dir {
        SortDir::Asc => items.sort_by(&mut cmp),
        SortDir::Desc => items.sort_by(|a, b| cmp(b, a)),
    }
}
