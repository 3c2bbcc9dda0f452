//! Path utilities: directory resolution, tilde expansion, and the containment rule.
//!
//! All comparisons here are lexical. Symlinks are not resolved and nothing is
//! required to exist on disk; checking that a navigation target exists is the
//! host's job.

use std::path::{Component, Path, PathBuf};

/// Directory name used under the platform data and config directories.
pub const APP_DIR_NAME: &str = "pathmarks";

/// Returns the user's home directory.
///
/// Falls back to the current directory when the platform cannot report one, so
/// that a misconfigured environment degrades to "nothing is under home" rather
/// than failing every command.
#[must_use]
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the data directory for pathmarks log files.
///
/// Resolves to `~/.local/share/pathmarks` on Linux.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| home_dir().join(".local").join("share"))
        .join(APP_DIR_NAME)
}

/// Returns the optional TOML configuration file location.
///
/// Resolves to `~/.config/pathmarks/config.toml` on Linux.
#[must_use]
pub fn get_config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| home_dir().join(".config"))
        .join(APP_DIR_NAME)
        .join("config.toml")
}

/// Expands a leading `~` to `home`.
///
/// Only `~` on its own or followed by `/` is expanded; `~user` forms are left alone.
///
/// # Examples
///
/// ```
/// use pathmarks::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// let home = Path::new("/home/alice");
/// assert_eq!(expand_tilde("~/docs", home), "/home/alice/docs");
/// assert_eq!(expand_tilde("~", home), "/home/alice");
/// assert_eq!(expand_tilde("/srv/data", home), "/srv/data");
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: &Path) -> String {
    if path == "~" {
        home.to_string_lossy().into_owned()
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

/// Normalizes a path to absolute form without touching the filesystem.
///
/// Relative paths are resolved against the process working directory. `.`
/// components are dropped and `..` pops the previous normal component (it never
/// climbs above the root).
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(path)
    };

    let mut out = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Returns `child` relative to `parent`, or `None` when `parent` is not
/// `child` or one of its ancestors.
///
/// This is the containment rule the path codec uses. Both sides are
/// normalized first and the test is component-wise, so `/home/a/b` does not
/// contain `/home/a/bc`. Equal paths yield an empty relative path.
///
/// # Examples
///
/// ```
/// use pathmarks::infrastructure::relative_to;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     relative_to(Path::new("/home/a/b/c"), Path::new("/home/a/b")),
///     Some(PathBuf::from("c"))
/// );
/// assert_eq!(relative_to(Path::new("/home/a/b"), Path::new("/home/a/b/")), Some(PathBuf::new()));
/// assert_eq!(relative_to(Path::new("/home/a/bc"), Path::new("/home/a/b")), None);
/// ```
#[must_use]
pub fn relative_to(child: &Path, parent: &Path) -> Option<PathBuf> {
    normalize(child)
        .strip_prefix(normalize(parent))
        .ok()
        .map(Path::to_path_buf)
}
