//! Flat-file alias store.
//!
//! Favorites and shorteners live in two plain text files under the user's home
//! directory, one `name|value` record per line:
//!
//! ```text
//! ~/.favoritedirs            ~/.shortenerdirs
//! Home|~                     proj|/repos/myproj
//! Work|{{proj}}/src          notes|/home/alice/Documents/notes
//! ```
//!
//! The files are shared with other tools, so lines this store does not
//! understand are carried through rewrites untouched.

use crate::codec::inline_alias;
use crate::domain::entry::split_line;
use crate::domain::error::Result;
use crate::domain::{Favorite, LineRecord, Shortener};
use crate::storage::backend::AliasStore;
use crate::storage::line_file::LineFile;
use std::path::PathBuf;

/// Alias store backed by the favorites and shorteners text files.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    favorites: LineFile,
    shorteners: LineFile,
}

impl FlatFileStore {
    pub fn new(favorites_path: impl Into<PathBuf>, shorteners_path: impl Into<PathBuf>) -> Self {
        Self {
            favorites: LineFile::new(favorites_path),
            shorteners: LineFile::new(shorteners_path),
        }
    }

    fn parse_all<R: LineRecord>(lines: &[String]) -> Vec<R> {
        lines.iter().filter_map(|line| R::parse_line(line)).collect()
    }

    /// Rewrites `file` without the records named `name`. Returns how many went.
    fn rewrite_without(file: &LineFile, name: &str) -> Result<usize> {
        let Some(lines) = file.read_lines()? else {
            tracing::debug!(path = ?file.path(), "nothing to remove, file absent");
            return Ok(0);
        };

        let before = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| split_line(line).map_or(true, |(n, _)| n != name))
            .collect();
        let removed = before - kept.len();

        file.rewrite(&kept)?;
        Ok(removed)
    }

    /// Replaces `{{alias}}` with `path` in every favorite that references it.
    fn inline_into_favorites(&self, alias: &str, path: &str) -> Result<usize> {
        let Some(lines) = self.favorites.read_lines()? else {
            return Ok(0);
        };

        let mut inlined = 0;
        let rewritten: Vec<String> = lines
            .into_iter()
            .map(|line| {
                let Some(favorite) = Favorite::parse_line(&line) else {
                    return line;
                };
                match inline_alias(&favorite.path_expression, alias, path) {
                    Some(expanded) => {
                        inlined += 1;
                        Favorite::new(favorite.name, expanded).to_line()
                    }
                    None => line,
                }
            })
            .collect();

        self.favorites.rewrite(&rewritten)?;
        Ok(inlined)
    }
}

impl AliasStore for FlatFileStore {
    fn load_favorites(&self) -> Result<Vec<Favorite>> {
        let _span = tracing::debug_span!("load_favorites", path = ?self.favorites.path()).entered();

        let favorites = self
            .favorites
            .read_lines()?
            .map_or_else(|| vec![Favorite::home()], |lines| Self::parse_all(&lines));

        tracing::debug!(count = favorites.len(), "favorites loaded");
        Ok(favorites)
    }

    fn load_shorteners(&self) -> Result<Vec<Shortener>> {
        let _span = tracing::debug_span!("load_shorteners", path = ?self.shorteners.path()).entered();

        let shorteners = self
            .shorteners
            .read_lines()?
            .map(|lines| Self::parse_all(&lines))
            .unwrap_or_default();

        tracing::debug!(count = shorteners.len(), "shorteners loaded");
        Ok(shorteners)
    }

    fn append_favorite(&self, favorite: &Favorite) -> Result<()> {
        let _span = tracing::debug_span!("append_favorite",
            name = %favorite.name,
            path_expression = %favorite.path_expression
        )
        .entered();

        self.favorites.append_line(&favorite.to_line())?;
        tracing::debug!("favorite appended");
        Ok(())
    }

    fn append_shortener(&self, shortener: &Shortener) -> Result<()> {
        let _span = tracing::debug_span!("append_shortener",
            name = %shortener.name,
            path = %shortener.path
        )
        .entered();

        self.shorteners.append_line(&shortener.to_line())?;
        tracing::debug!("shortener appended");
        Ok(())
    }

    fn remove_favorite_by_name(&self, name: &str) -> Result<usize> {
        let _span = tracing::debug_span!("remove_favorite_by_name", name = %name).entered();

        let removed = Self::rewrite_without(&self.favorites, name)?;
        tracing::debug!(removed = removed, "favorites rewritten");
        Ok(removed)
    }

    fn remove_shortener_by_name(&self, name: &str) -> Result<Option<Shortener>> {
        let _span = tracing::debug_span!("remove_shortener_by_name", name = %name).entered();

        let Some(lines) = self.shorteners.read_lines()? else {
            tracing::debug!("no shorteners file");
            return Ok(None);
        };

        let Some(removed) = Self::parse_all::<Shortener>(&lines)
            .into_iter()
            .find(|s| s.name == name)
        else {
            tracing::debug!("no shortener with that name");
            return Ok(None);
        };

        // Inline before removing: favorites never reference an undefined alias.
        let inlined = self.inline_into_favorites(&removed.name, &removed.path)?;
        tracing::debug!(inlined = inlined, path = %removed.path, "favorites inlined");

        Self::rewrite_without(&self.shorteners, name)?;
        tracing::debug!("shortener removed");
        Ok(Some(removed))
    }
}
