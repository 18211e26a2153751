//! Small utility helpers for URL encoding, resident URL parsing and configuration.

pub mod config;
pub mod paths;

use std::collections::HashSet;
use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Extract the numeric character id from a resident URL.
///
/// Inputs:
/// - `url`: Reference such as `https://rickandmortyapi.com/api/character/38`
///
/// Output:
/// - `Some(38)` when the last path segment is numeric; `None` otherwise.
///
/// Details:
/// - Trailing slashes are ignored.
#[must_use]
pub fn resident_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|seg| seg.parse::<u32>().ok())
}

/// What: Remove duplicate ids keeping the first occurrence.
///
/// Inputs:
/// - `ids`: Ids in discovery order
///
/// Output:
/// - Ids in first-seen order without repeats.
#[must_use]
pub fn dedup_ids(ids: impl IntoIterator<Item = u32>) -> Vec<u32> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Percent encoding leaves unreserved bytes and escapes the rest
    ///
    /// - Input: "Rick & Morty/C-137"
    /// - Output: "Rick%20%26%20Morty%2FC-137"
    fn percent_encode_reserved() {
        assert_eq!(percent_encode("Rick & Morty/C-137"), "Rick%20%26%20Morty%2FC-137");
        assert_eq!(percent_encode("abc-._~"), "abc-._~");
    }

    #[test]
    /// What: Resident ids come from the last numeric path segment
    ///
    /// - Input: Regular, trailing-slash and non-numeric URLs
    /// - Output: Some(id) for numeric tails, None otherwise
    fn resident_id_parses_tail() {
        assert_eq!(
            resident_id("https://rickandmortyapi.com/api/character/38"),
            Some(38)
        );
        assert_eq!(
            resident_id("https://rickandmortyapi.com/api/character/1/"),
            Some(1)
        );
        assert_eq!(resident_id("https://rickandmortyapi.com/api/character/"), None);
        assert_eq!(resident_id(""), None);
    }

    #[test]
    /// What: Dedup keeps first-seen order
    ///
    /// - Input: 3,1,3,2,1
    /// - Output: 3,1,2
    fn dedup_ids_first_seen() {
        assert_eq!(dedup_ids([3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }
}
