//! Per-host-session plugin state.
//!
//! [`Session`] is constructed once when the host loads the plugin and passed to
//! every command handler. It owns the alias store handle, the path codec, the
//! hot slots, and the visit history; there is no process-wide state.

use crate::codec::PathCodec;
use crate::domain::error::Result;
use crate::navigation::{History, HotSlots};
use crate::storage::AliasStore;
use crate::ui::{Matcher, SkimMatcher};
use std::path::PathBuf;

/// State shared by all command handlers for the lifetime of the host session.
pub struct Session {
    store: Box<dyn AliasStore>,
    codec: PathCodec,
    hot_slots: HotSlots,
    history: History,
    matcher: Box<dyn Matcher>,
}

impl Session {
    /// Creates a session over `store`, resolving `~` against `home`.
    #[must_use]
    pub fn new(store: Box<dyn AliasStore>, home: impl Into<PathBuf>, history_capacity: usize) -> Self {
        Self {
            store,
            codec: PathCodec::new(home),
            hot_slots: HotSlots::new(),
            history: History::with_capacity(history_capacity),
            matcher: Box::new(SkimMatcher::default()),
        }
    }

    /// Replaces the quicksearch matcher, for hosts that bring their own.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Box<dyn Matcher>) -> Self {
        self.matcher = matcher;
        self
    }

    #[must_use]
    pub fn store(&self) -> &dyn AliasStore {
        self.store.as_ref()
    }

    #[must_use]
    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    #[must_use]
    pub fn hot_slots(&self) -> &HotSlots {
        &self.hot_slots
    }

    pub fn hot_slots_mut(&mut self) -> &mut HotSlots {
        &mut self.hot_slots
    }

    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    /// Shortens `path` against the shorteners currently on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the shorteners file cannot be read.
    pub fn shorten(&self, path: &str) -> Result<String> {
        let shorteners = self.store.load_shorteners()?;
        Ok(self.codec.shorten(path, &shorteners))
    }

    /// Expands `expr` against the shorteners currently on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the shorteners file cannot be read.
    pub fn expand(&self, expr: &str) -> Result<String> {
        let shorteners = self.store.load_shorteners()?;
        Ok(self.codec.expand(expr, &shorteners))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("codec", &self.codec)
            .field("hot_slots", &self.hot_slots)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
