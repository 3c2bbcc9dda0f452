//! Alias store abstraction.
//!
//! This module defines the [`AliasStore`] trait that every command handler reads
//! and writes through. The store is the single source of truth: implementations
//! must not cache, every load reflects the files as they are right now.

use crate::domain::error::Result;
use crate::domain::{Favorite, Shortener};

/// Persistent favorites and shorteners.
///
/// # Implementations
///
/// - [`FlatFileStore`](crate::storage::FlatFileStore): two `name|value` text files (default)
///
/// # Examples
///
/// ```no_run
/// use pathmarks::storage::{AliasStore, FlatFileStore};
///
/// let store = FlatFileStore::new("/home/alice/.favoritedirs", "/home/alice/.shortenerdirs");
/// for favorite in store.load_favorites()? {
///     println!("{} -> {}", favorite.name, favorite.path_expression);
/// }
/// # Ok::<(), pathmarks::PathmarksError>(())
/// ```
pub trait AliasStore {
    /// Loads every favorite in file order.
    ///
    /// Returns `[Home|~]` when no favorites file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn load_favorites(&self) -> Result<Vec<Favorite>>;

    /// Loads every shortener in file order, empty when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    fn load_shorteners(&self) -> Result<Vec<Shortener>>;

    /// Appends a favorite. No deduplication or name validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    fn append_favorite(&self, favorite: &Favorite) -> Result<()>;

    /// Appends a shortener. No deduplication or name validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    fn append_shortener(&self, shortener: &Shortener) -> Result<()>;

    /// Removes every favorite named `name`, preserving all other lines verbatim.
    ///
    /// Returns the number of removed entries. An unknown name rewrites the file
    /// unchanged; a missing file is left missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or rewritten.
    fn remove_favorite_by_name(&self, name: &str) -> Result<usize>;

    /// Removes the shortener named `name`, inlining it into favorites first.
    ///
    /// Every favorite referencing `{{name}}` is rewritten with the removed
    /// shortener's path before the shortener line disappears. The two rewrites
    /// are not transactional: a crash between them leaves favorites inlined
    /// while the shortener still exists.
    ///
    /// Returns the removed entry, or `None` when no shortener has that name.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or rewritten.
    fn remove_shortener_by_name(&self, name: &str) -> Result<Option<Shortener>>;
}
