//! pathmarks: favorite directories, path shorteners, and quick navigation for a
//! host file manager.
//!
//! The plugin adds commands to:
//! - Bookmark directories as named favorites and jump back to them via quicksearch
//! - Define `{{name}}` shorteners so favorites survive a project moving on disk
//! - Remember up to four locations in hot slots
//! - Walk back through recently visited directories
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host shim (main.rs, or the embedding file manager) │  ← implements Host
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Command parsing and dispatch                     │
//! │  - Session state (hot slots, history)               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Codec         │   │ Storage       │   │ Navigation    │
//! │ (codec/)      │   │ (storage/)    │   │ (navigation/) │
//! │ - shorten     │   │ - flat files  │   │ - history     │
//! │ - expand      │   │ - AliasStore  │   │ - hot slots   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain, Infrastructure & UI helpers                │
//! │  - Records and errors (domain/)                     │
//! │  - Home/data dirs, containment rule (infrastructure/)│
//! │  - Quicksearch candidates (ui/)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Persisted state
//!
//! Two plain text files, one `name|value` record per line:
//!
//! - `~/.favoritedirs`: `name|pathExpression`, e.g. `Work|{{proj}}/src`
//! - `~/.shortenerdirs`: `name|absolutePath`, e.g. `proj|/repos/myproj`
//!
//! Hot slots and history are in-memory only.
//!
//! # Example
//!
//! ```rust
//! use pathmarks::storage::{AliasStore, FlatFileStore};
//! use pathmarks::{Session, Shortener};
//!
//! let dir = std::env::temp_dir().join("pathmarks-lib-doc");
//! std::fs::create_dir_all(&dir)?;
//! let store = FlatFileStore::new(dir.join(".favoritedirs"), dir.join(".shortenerdirs"));
//! std::fs::write(dir.join(".shortenerdirs"), "proj|/repos/myproj\n")?;
//!
//! let session = Session::new(Box::new(store), "/home/alice", 10);
//! assert_eq!(session.shorten("/repos/myproj/src/main")?, "{{proj}}/src/main");
//! assert_eq!(session.expand("{{proj}}/src")?, "/repos/myproj/src");
//! # Ok::<(), pathmarks::PathmarksError>(())
//! ```

pub mod app;
pub mod codec;
pub mod domain;
pub mod infrastructure;
pub mod navigation;
pub mod storage;
pub mod ui;

pub mod observability;

pub use app::{execute, on_path_changed, Command, Host, Outcome, Session};
pub use domain::{Favorite, PathmarksError, Result, Shortener};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Plugin configuration.
///
/// Read from `~/.config/pathmarks/config.toml` when present, or from the
/// settings map an embedding host passes at load time.
///
/// # Example
///
/// ```toml
/// favorites_file = "~/.favoritedirs"
/// shorteners_file = "~/.shortenerdirs"
/// history_capacity = 10
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Favorites file; `~` is expanded. Default: `~/.favoritedirs`
    pub favorites_file: String,

    /// Shorteners file; `~` is expanded. Default: `~/.shortenerdirs`
    pub shorteners_file: String,

    /// Number of locations the back-navigation history remembers. Default: 10
    pub history_capacity: usize,

    /// Tracing filter directive (`trace`, `debug`, `info`, `warn`, `error`).
    ///
    /// Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file; `~` is expanded. Default: `<data dir>/pathmarks/pathmarks.log`
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            favorites_file: "~/.favoritedirs".to_string(),
            shorteners_file: "~/.shortenerdirs".to_string(),
            history_capacity: navigation::DEFAULT_CAPACITY,
            trace_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a host-supplied settings map.
    ///
    /// Unknown keys are ignored; unparsable values fall back to defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use pathmarks::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("history_capacity".to_string(), "25".to_string());
    /// map.insert("favorites_file".to_string(), "~/bookmarks".to_string());
    ///
    /// let config = Config::from_host(&map);
    /// assert_eq!(config.history_capacity, 25);
    /// assert_eq!(config.favorites_file, "~/bookmarks");
    /// assert_eq!(config.shorteners_file, "~/.shortenerdirs");
    /// ```
    #[must_use]
    pub fn from_host(settings: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            settings
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            favorites_file: non_empty("favorites_file").unwrap_or(defaults.favorites_file),
            shorteners_file: non_empty("shorteners_file").unwrap_or(defaults.shorteners_file),
            history_capacity: non_empty("history_capacity")
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.history_capacity),
            trace_level: non_empty("trace_level"),
            log_file: non_empty("log_file"),
        }
    }

    /// Parses a TOML document; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PathmarksError::Config`] if the document is not valid TOML or
    /// a value has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PathmarksError::Config(e.to_string()))
    }

    /// Loads a TOML configuration file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolved favorites file location.
    #[must_use]
    pub fn favorites_path(&self, home: &Path) -> PathBuf {
        PathBuf::from(infrastructure::expand_tilde(&self.favorites_file, home))
    }

    /// Resolved shorteners file location.
    #[must_use]
    pub fn shorteners_path(&self, home: &Path) -> PathBuf {
        PathBuf::from(infrastructure::expand_tilde(&self.shorteners_file, home))
    }

    /// Resolved log file location.
    #[must_use]
    pub fn log_path(&self, home: &Path) -> PathBuf {
        self.log_file.as_ref().map_or_else(
            || infrastructure::get_data_dir().join("pathmarks.log"),
            |file| PathBuf::from(infrastructure::expand_tilde(file, home)),
        )
    }
}

/// Creates the session a host keeps for the lifetime of the plugin.
///
/// Resolves the home directory, wires a [`FlatFileStore`](storage::FlatFileStore)
/// over the configured files, and starts with empty hot slots and history.
/// Tracing is initialized separately with [`observability::init_tracing`].
#[must_use]
pub fn initialize(config: &Config) -> Session {
    let home = infrastructure::home_dir();
    tracing::debug!(home = ?home, "initializing pathmarks plugin");

    let store = storage::FlatFileStore::new(config.favorites_path(&home), config.shorteners_path(&home));
    Session::new(Box::new(store), home, config.history_capacity)
}
