//! Favorite and shortener records.
//!
//! Both record kinds share one on-disk shape: a single `\n`-terminated line of the
//! form `name|value`. A favorite's value is a path expression (raw path, `~`-relative
//! path, or a `{{alias}}/rest` reference); a shortener's value is an absolute
//! directory.

/// Separator between the name and value fields of a record line.
pub const FIELD_SEPARATOR: char = '|';

/// Splits a raw line into its `(name, value)` fields.
///
/// Surrounding whitespace (including the trailing newline) is trimmed first. The
/// name is everything before the first separator. A line without a separator, or
/// with the separator in first position, is malformed and yields `None`.
#[must_use]
pub fn split_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    match line.find(FIELD_SEPARATOR) {
        Some(idx) if idx > 0 => Some((&line[..idx], &line[idx + 1..])),
        _ => None,
    }
}

/// A record stored as one `name|value` line.
pub trait LineRecord: Sized {
    /// Builds a record from already-split fields.
    fn from_fields(name: &str, value: &str) -> Self;

    /// Label used for lookups, removal, and the quicksearch picker.
    fn name(&self) -> &str;

    /// Everything after the separator.
    fn value(&self) -> &str;

    /// Parses a line, returning `None` for blank or malformed lines.
    fn parse_line(line: &str) -> Option<Self> {
        split_line(line).map(|(name, value)| Self::from_fields(name, value))
    }

    /// Renders the record as a line, without the trailing newline.
    fn to_line(&self) -> String {
        format!("{}{FIELD_SEPARATOR}{}", self.name(), self.value())
    }
}

/// A named, user-bookmarked directory.
///
/// Names are unique by convention only: duplicates are never deduplicated on
/// write, and lookups return the first match in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    /// User-chosen label.
    pub name: String,

    /// Raw path, `~`-relative path, or `{{alias}}/rest` expression.
    pub path_expression: String,
}

impl Favorite {
    pub fn new(name: impl Into<String>, path_expression: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path_expression: path_expression.into(),
        }
    }

    /// The entry returned when no favorites file exists yet.
    #[must_use]
    pub fn home() -> Self {
        Self::new("Home", "~")
    }
}

impl LineRecord for Favorite {
    fn from_fields(name: &str, value: &str) -> Self {
        Self::new(name, value)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.path_expression
    }
}

/// A named absolute directory used to compress long paths into a `{{name}}` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortener {
    pub name: String,
    pub path: String,
}

impl Shortener {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl LineRecord for Shortener {
    fn from_fields(name: &str, value: &str) -> Self {
        Self::new(name, value)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> &str {
        &self.path
    }
}
