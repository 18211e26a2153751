//! Command-line runtime: load settings, fetch, filter, print.

use crate::args::Args;
use crate::logic::fetch::{DrainFetcher, FetchMode, PagedFetcher, page_window, pages_for};
use crate::logic::filter::{Criteria, apply};
use crate::sources::{CatalogClient, HttpCatalog};
use crate::state::{Character, shared_store, snapshot};
use crate::util::config::Settings;

pub mod render;

/// Result type alias for the command-line runtime.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Characters ready for display plus page bookkeeping.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    /// Characters on the shown page, filtered and sorted.
    pub characters: Vec<Character>,
    /// Page shown.
    pub page: u32,
    /// Total pages for the query.
    pub total_pages: u32,
    /// Characters in the store after local filtering (all pages for drain mode).
    pub matched: usize,
}

/// What: Fetch with the selected strategy and turn the store into a listing.
///
/// Inputs:
/// - `client`: Catalog access
/// - `mode`: Paged or drain fetching
/// - `criteria`: Filter and sort parameters
/// - `page`: 1-based page to show
/// - `pages`: Consecutive API pages to load (paged mode only, at least 1)
///
/// Output:
/// - `Ok(Listing)` or the readable fetch error message.
///
/// # Errors
/// - The fetcher's error message when a request failed for a reason other than 404
///
/// Details:
/// - Paged: page `page` replaces the store, following pages are appended
///   until `pages` were loaded, the server reports no more or the page number
///   would pass `u32::MAX`. The location filter is applied locally.
/// - Drain: the whole result set is loaded, filtered locally (without the
///   location, which the fetcher already resolved) and sliced to `page`.
pub async fn load_listing<C: CatalogClient>(
    client: C,
    mode: FetchMode,
    criteria: &Criteria,
    page: u32,
    pages: u32,
) -> std::result::Result<Listing, String> {
    let page = page.max(1);
    let store = shared_store();
    match mode {
        FetchMode::Paged => {
            let mut fetcher = PagedFetcher::new(client, store.clone());
            fetcher.fetch_page(criteria, page, false).await;
            for offset in 1..pages.max(1) {
                let Some(next) = page.checked_add(offset) else {
                    break;
                };
                if fetcher.status().error.is_some() || next > snapshot(&store).total_pages() {
                    break;
                }
                fetcher.fetch_page(criteria, next, true).await;
            }
            if let Some(err) = fetcher.status().error.clone() {
                return Err(err);
            }
            let snap = snapshot(&store);
            let characters = apply(snap.characters(), criteria);
            Ok(Listing {
                matched: characters.len(),
                characters,
                page: snap.current_page(),
                total_pages: snap.total_pages(),
            })
        }
        FetchMode::Drain => {
            let mut fetcher = DrainFetcher::new(client, store.clone());
            fetcher.fetch_page(criteria, page).await;
            if let Some(err) = fetcher.status().error.clone() {
                return Err(err);
            }
            let snap = snapshot(&store);
            let local = if criteria.location.trim().is_empty() {
                criteria.clone()
            } else {
                criteria.for_server_resolved_location()
            };
            let all = apply(snap.characters(), &local);
            Ok(Listing {
                characters: page_window(&all, page).to_vec(),
                page,
                total_pages: pages_for(all.len()),
                matched: all.len(),
            })
        }
    }
}

/// What: Run the command line once and print the result.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - `Ok(())` after printing; `Err` with a readable message on failure.
///
/// # Errors
/// - HTTP client construction failure
/// - Fetch failure other than "nothing found"
/// - JSON serialization failure with `--json`
pub async fn run(args: &Args) -> Result<()> {
    let settings = args
        .config
        .as_deref()
        .map_or_else(Settings::load, Settings::load_from);
    let mode = args.fetch_mode(&settings);
    let criteria = args.criteria(&settings);
    tracing::info!(
        mode = %mode,
        name = %criteria.name,
        location = %criteria.location,
        page = args.page,
        "listing characters"
    );
    let client = HttpCatalog::new(&settings.api_base_url, settings.request_timeout())?;
    let listing = load_listing(client, mode, &criteria, args.page, args.pages).await?;
    tracing::info!(
        shown = listing.characters.len(),
        matched = listing.matched,
        total_pages = listing.total_pages,
        "listing ready"
    );
    if args.json {
        println!("{}", render::json(&listing)?);
    } else {
        print!("{}", render::table(&listing));
    }
    Ok(())
}
