//! Configuration file parsing utilities and the user settings they feed.
//!
//! Settings live in a `key = value` file (`settings.conf`). Comment lines and
//! unknown keys are skipped; a missing file yields the defaults.

use std::path::Path;
use std::time::Duration;

use crate::logic::fetch::FetchMode;
use crate::logic::sort::{SortDir, SortKey};

/// Default API root.
pub const DEFAULT_API_BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Trims whitespace from both key and value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (key, value) = line.trim().split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// User settings for the catalog browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// API root URL.
    pub api_base_url: String,
    /// Per-request timeout in seconds; `0` disables the timeout.
    pub request_timeout_secs: u64,
    /// Which fetcher the CLI uses.
    pub fetch_mode: FetchMode,
    /// Sort key used when the command line gives none.
    pub default_sort: Option<SortKey>,
    /// Sort direction used when the command line gives none.
    pub default_direction: SortDir,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            fetch_mode: FetchMode::default(),
            default_sort: None,
            default_direction: SortDir::Asc,
        }
    }
}

impl Settings {
    /// What: Parse settings from `key = value` text.
    ///
    /// Inputs:
    /// - `text`: File contents
    ///
    /// Output:
    /// - Settings with recognized keys applied over the defaults.
    ///
    /// Details:
    /// - Unknown keys and unparsable values are logged and ignored.
    /// - Keys are case-insensitive; later lines override earlier ones.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        for line in text.lines() {
            if skip_comment_or_empty(line) {
                continue;
            }
            let Some((key, value)) = parse_key_value(line) else {
                tracing::warn!(line = %line.trim(), "ignoring settings line without '='");
                continue;
            };
            if let Err(e) = settings.apply(&key.to_ascii_lowercase(), &value) {
                tracing::warn!(key = %key, value = %value, error = %e, "ignoring invalid setting");
            }
        }
        settings
    }

    /// Apply a single key/value pair.
    fn apply(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "api_base_url" => {
                if value.is_empty() {
                    return Err("empty URL".to_string());
                }
                self.api_base_url = value.to_string();
            }
            "request_timeout_secs" => {
                self.request_timeout_secs = value
                    .parse()
                    .map_err(|e| format!("not a number: {e}"))?;
            }
            "fetch_mode" => self.fetch_mode = value.parse()?,
            "default_sort" => {
                self.default_sort = match value.to_ascii_lowercase().as_str() {
                    "" | "none" => None,
                    other => Some(other.parse()?),
                };
            }
            "default_direction" => self.default_direction = value.parse()?,
            other => return Err(format!("unknown key '{other}'")),
        }
        Ok(())
    }

    /// What: Load settings from a file.
    ///
    /// Inputs:
    /// - `path`: Settings file path
    ///
    /// Output:
    /// - Parsed settings; defaults when the file is missing or unreadable.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                tracing::info!(path = %path.display(), "loaded settings");
                Self::parse(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file; using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
                Self::default()
            }
        }
    }

    /// Load settings from the default location under the config directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&crate::util::paths::settings_path())
    }

    /// Request timeout, `None` when disabled.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        if self.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.request_timeout_secs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    /// What: Comment and key/value helpers
    ///
    /// - Input: Comment styles, "a = b = c", "novalue"
    /// - Output: Comments skipped; split on first '='; None without '='
    fn helpers_parse_lines() {
        assert!(skip_comment_or_empty("  # c"));
        assert!(skip_comment_or_empty("// c"));
        assert!(skip_comment_or_empty("; c"));
        assert!(skip_comment_or_empty("   "));
        assert!(!skip_comment_or_empty("a = b"));
        assert_eq!(
            parse_key_value(" a = b = c "),
            Some(("a".to_string(), "b = c".to_string()))
        );
        assert_eq!(parse_key_value("novalue"), None);
    }

    #[test]
    /// What: Recognized keys override defaults, bad lines are ignored
    ///
    /// - Input: Text with all keys, one unknown key and one bad number
    /// - Output: Valid values applied; timeout keeps the last valid value
    fn parse_applies_known_keys() {
        let text = "\
# ramdex settings
api_base_url = http://localhost:8080/api
request_timeout_secs = 3
request_timeout_secs = soon
fetch_mode = paged
default_sort = episodes
default_direction = desc
colour = green
";
        let s = Settings::parse(text);
        assert_eq!(s.api_base_url, "http://localhost:8080/api");
        assert_eq!(s.request_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(s.fetch_mode, FetchMode::Paged);
        assert_eq!(s.default_sort, Some(SortKey::Episodes));
        assert_eq!(s.default_direction, SortDir::Desc);
    }

    #[test]
    /// What: Zero timeout disables it
    ///
    /// - Input: `request_timeout_secs = 0`
    /// - Output: `request_timeout()` is None
    fn zero_timeout_disables() {
        let s = Settings::parse("request_timeout_secs = 0");
        assert_eq!(s.request_timeout(), None);
    }

    #[test]
    /// What: Loading from disk and from a missing path
    ///
    /// - Input: Temp file with fetch_mode, then a nonexistent path
    /// - Output: File value applied; defaults for missing file
    fn load_from_file_and_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        let mut f = std::fs::File::create(&path).expect("create");
        writeln!(f, "fetch_mode = paged").expect("write");
        drop(f);
        assert_eq!(Settings::load_from(&path).fetch_mode, FetchMode::Paged);
        assert_eq!(
            Settings::load_from(&dir.path().join("absent.conf")),
            Settings::default()
        );
    }
}
