//! Plain-text and JSON rendering of a [`Listing`].

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use super::Listing;
use crate::state::Character;

/// Column headers in display order.
const HEADERS: [&str; 5] = ["ID", "NAME", "STATUS", "EPISODES", "LOCATION"];

/// Cells of one table row.
fn row(c: &Character) -> [String; 5] {
    [
        c.id.to_string(),
        c.name.clone(),
        c.status.to_string(),
        c.episode_count().to_string(),
        c.location.name.clone(),
    ]
}

/// Pad `s` with spaces to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// What: Render a listing as an aligned table with a page footer.
///
/// Inputs:
/// - `listing`: Characters and page bookkeeping
///
/// Output:
/// - Table text ending in a newline; a short notice when nothing matched.
///
/// Details:
/// - Columns are sized by display width so wide glyphs stay aligned.
#[must_use]
pub fn table(listing: &Listing) -> String {
    let mut out = String::new();
    if listing.characters.is_empty() {
        out.push_str("No characters found.\n");
        return out;
    }
    let rows: Vec<[String; 5]> = listing.characters.iter().map(row).collect();
    let mut widths = HEADERS.map(|h| h.width());
    for r in &rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.width());
        }
    }
    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(cell, w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let _ = writeln!(out, "{}", line(HEADERS.as_slice()));
    for r in &rows {
        let cells: Vec<&str> = r.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", line(&cells));
    }
    let _ = writeln!(
        out,
        "\npage {} of {} ({} characters)",
        listing.page, listing.total_pages, listing.matched
    );
    out
}

/// What: Render a listing as pretty-printed JSON.
///
/// Inputs:
/// - `listing`: Characters and page bookkeeping
///
/// Output:
/// - JSON object with `page`, `total_pages`, `matched` and `characters`.
///
/// # Errors
/// - Serialization failure from `serde_json`
pub fn json(listing: &Listing) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({
        "page": listing.page,
        "total_pages": listing.total_pages,
        "matched": listing.matched,
        "characters": listing.characters,
    }))
}
