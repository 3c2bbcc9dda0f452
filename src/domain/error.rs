//! Error types for the pathmarks plugin.
//!
//! This module defines the centralized error type [`PathmarksError`] and a type alias
//! [`Result`] used throughout the plugin. Missing alias files, malformed lines,
//! unknown names, and out-of-range slot indices are not errors: they resolve to
//! documented defaults. Only genuine failures reach this type.

use thiserror::Error;

/// The main error type for pathmarks operations.
///
/// # Examples
///
/// ```
/// use pathmarks::PathmarksError;
///
/// fn parse_capacity(raw: &str) -> Result<usize, PathmarksError> {
///     raw.parse()
///         .map_err(|_| PathmarksError::Config(format!("invalid capacity: {raw}")))
/// }
///
/// assert!(parse_capacity("ten").is_err());
/// ```
#[derive(Debug, Error)]
pub enum PathmarksError {
    /// Filesystem or I/O operation failed.
    ///
    /// Permission problems, a full disk, or a failed rename while rewriting an
    /// alias file. These propagate to the host's error surface unhandled.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// Raised when a TOML configuration file cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host command invocation could not be understood.
    ///
    /// Raised for malformed key-binding JSON or an unknown command name.
    #[error("Command error: {0}")]
    Command(String),
}

/// A specialized `Result` type for pathmarks operations.
pub type Result<T> = std::result::Result<T, PathmarksError>;
