//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

use crate::logic::fetch::FetchMode;
use crate::logic::filter::{Criteria, StatusFilter};
use crate::logic::sort::{SortDir, SortKey};
use crate::util::config::Settings;

/// ramdex - Browse, filter and sort the Rick and Morty character catalog
#[derive(Parser, Debug, Clone)]
#[command(name = "ramdex")]
#[command(version)]
#[command(about = "Browse, filter and sort the Rick and Morty character catalog", long_about = None)]
pub struct Args {
    /// Only characters whose name contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Status filter: All, Alive, Dead or unknown
    #[arg(short, long, default_value = "All")]
    pub status: StatusFilter,

    /// Only characters at locations whose name contains this text
    #[arg(short = 'L', long, default_value = "")]
    pub location: String,

    /// Sort by `name` or `episodes` (default from settings, else API order)
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,

    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Number of consecutive API pages to load in paged mode
    #[arg(long, default_value_t = 1)]
    pub pages: u32,

    /// Fetch strategy: `paged` (one API page per request) or `drain` (whole result set)
    #[arg(long)]
    pub mode: Option<FetchMode>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Settings file to use instead of ~/.config/ramdex/settings.conf
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// What: Build filter/sort criteria from the arguments and settings defaults.
    ///
    /// Inputs:
    /// - `settings`: Loaded settings providing sort defaults
    ///
    /// Output:
    /// - Criteria for the fetchers and the local engine.
    ///
    /// Details:
    /// - `--sort` overrides `default_sort`; `--desc` overrides `default_direction`.
    #[must_use]
    pub fn criteria(&self, settings: &Settings) -> Criteria {
        Criteria {
            name: self.name.clone(),
            status: self.status,
            location: self.location.clone(),
            sort: self.sort.or(settings.default_sort),
            direction: if self.desc {
                SortDir::Desc
            } else {
                settings.default_direction
            },
        }
    }

    /// Fetch mode from `--mode`, else from settings.
    #[must_use]
    pub fn fetch_mode(&self, settings: &Settings) -> FetchMode {
        self.mode.unwrap_or(settings.fetch_mode)
    }
}
