//! Where ramdex keeps its settings file and logs.
//!
//! Everything lives under one directory, resolved in this order:
//! `$RAMDEX_CONFIG_DIR`, `$XDG_CONFIG_HOME/ramdex`, `$HOME/.config/ramdex`,
//! and finally `./.ramdex` when no home directory is known.

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the config directory outright.
pub const CONFIG_DIR_ENV: &str = "RAMDEX_CONFIG_DIR";

/// What: Pick the config directory from environment values.
///
/// Inputs:
/// - `var`: Lookup for an environment variable; blank values count as unset
///
/// Output:
/// - Directory path; not created.
fn resolve_config_dir(var: impl Fn(&str) -> Option<String>) -> PathBuf {
    let set = |name: &str| var(name).filter(|v| !v.trim().is_empty());
    if let Some(dir) = set(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Some(xdg) = set("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("ramdex");
    }
    set("HOME").map_or_else(
        || PathBuf::from(".ramdex"),
        |home| PathBuf::from(home).join(".config").join("ramdex"),
    )
}

/// Create `dir` if missing; failures surface later when the directory is used.
fn ensured(dir: PathBuf) -> PathBuf {
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Config directory for ramdex (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    ensured(resolve_config_dir(|name| env::var(name).ok()))
}

/// Log directory, `<config>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    ensured(config_dir().join("logs"))
}

/// Settings file, `<config>/settings.conf` (may not exist).
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    /// What: Override, XDG, HOME and fallback are tried in order
    ///
    /// - Input: Environments with progressively fewer variables set
    /// - Output: The first non-blank source wins
    fn config_dir_precedence() {
        let all = [
            (CONFIG_DIR_ENV, "/srv/ramdex"),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/u"),
        ];
        assert_eq!(resolve_config_dir(lookup(&all)), PathBuf::from("/srv/ramdex"));

        let blank_override = [
            (CONFIG_DIR_ENV, "  "),
            ("XDG_CONFIG_HOME", "/xdg"),
            ("HOME", "/home/u"),
        ];
        assert_eq!(
            resolve_config_dir(lookup(&blank_override)),
            PathBuf::from("/xdg/ramdex")
        );

        let home_only = [("HOME", "/home/u")];
        assert_eq!(
            resolve_config_dir(lookup(&home_only)),
            PathBuf::from("/home/u/.config/ramdex")
        );

        assert_eq!(resolve_config_dir(lookup(&[])), PathBuf::from(".ramdex"));
    }

    #[test]
    /// What: Missing directories are created on demand
    ///
    /// - Input: Nested path inside a temp dir
    /// - Output: Same path returned and present on disk
    fn ensured_creates_nested_dirs() {
        let base = tempfile::tempdir().expect("tempdir");
        let dir = base.path().join("ramdex").join("logs");
        assert_eq!(ensured(dir.clone()), dir);
        assert!(dir.is_dir());
    }
}
