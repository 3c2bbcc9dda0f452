//! Conversion between raw directory paths and their compact stored form.
//!
//! A compact path is either `{{alias}}/rest` (the directory sits under a
//! shortener), `~/rest` (under the home directory), or the raw path itself. The
//! codec is pure: it never reads the alias files and never caches, callers pass
//! the shortener list they just loaded.

use super::alias::{find_token, token_for};
use crate::domain::Shortener;
use crate::infrastructure::paths::{expand_tilde, relative_to};
use std::path::{Component, Path, PathBuf};

/// Shortens and expands paths against a home directory and a shortener list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCodec {
    home: PathBuf,
}

impl PathCodec {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    #[must_use]
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Expands a stored path expression into an absolute path.
    ///
    /// The first `{{alias}}` token is replaced with the path of the first
    /// shortener carrying that name. Unknown aliases are left in place. A leading
    /// `~` is then expanded to the home directory. The result is not checked
    /// against the filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmarks::codec::PathCodec;
    /// use pathmarks::Shortener;
    ///
    /// let codec = PathCodec::new("/home/alice");
    /// let shorteners = vec![Shortener::new("proj", "/repos/myproj")];
    ///
    /// assert_eq!(codec.expand("{{proj}}/src", &shorteners), "/repos/myproj/src");
    /// assert_eq!(codec.expand("~/docs", &shorteners), "/home/alice/docs");
    /// ```
    #[must_use]
    pub fn expand(&self, expr: &str, shorteners: &[Shortener]) -> String {
        let substituted = find_token(expr)
            .and_then(|token| {
                shorteners
                    .iter()
                    .find(|s| s.name == token.name)
                    .map(|s| format!("{}{}{}", token.prefix, s.path, token.suffix))
            })
            .unwrap_or_else(|| expr.to_string());

        let expanded = expand_tilde(&substituted, &self.home);
        tracing::trace!(expr = %expr, expanded = %expanded, "expanded path expression");
        expanded
    }

    /// Compresses an absolute path into its stored form.
    ///
    /// Shorteners are scanned in file order and the first one whose directory
    /// contains `path` wins, even when a later one is more specific. When no
    /// shortener applies, a path under the home directory becomes `~/rest`.
    /// Anything else is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmarks::codec::PathCodec;
    /// use pathmarks::Shortener;
    ///
    /// let codec = PathCodec::new("/home/alice");
    /// let shorteners = vec![Shortener::new("proj", "/repos/myproj")];
    ///
    /// assert_eq!(codec.shorten("/repos/myproj/src/main", &shorteners), "{{proj}}/src/main");
    /// assert_eq!(codec.shorten("/home/alice/docs", &[]), "~/docs");
    /// assert_eq!(codec.shorten("/srv/www", &shorteners), "/srv/www");
    /// ```
    #[must_use]
    pub fn shorten(&self, path: &str, shorteners: &[Shortener]) -> String {
        let target = Path::new(path);

        for shortener in shorteners {
            if let Some(rest) = relative_to(target, Path::new(&shortener.path)) {
                tracing::trace!(path = %path, shortener = %shortener.name, "shortener matched");
                return join_remainder(&token_for(&shortener.name), &rest);
            }
        }

        relative_to(target, &self.home).map_or_else(
            || path.to_string(),
            |rest| join_remainder("~", &rest),
        )
    }
}

/// Appends a relative remainder to `head` with `/` separators.
///
/// An empty remainder leaves `head` bare, so `{{name}}` and `~` expand back to
/// exactly the directory they stand for.
fn join_remainder(head: &str, rest: &Path) -> String {
    let mut out = head.to_string();
    for component in rest.components() {
        if let Component::Normal(part) = component {
            out.push('/');
            out.push_str(&part.to_string_lossy());
        }
    }
    out
}
