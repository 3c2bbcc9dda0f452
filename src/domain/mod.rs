//! Domain layer for the pathmarks plugin.
//!
//! This module contains the record types the plugin persists and the error type
//! shared by every layer. Nothing here touches the filesystem or the host.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Favorite and shortener records with their line format

pub mod entry;
pub mod error;

pub use entry::{Favorite, LineRecord, Shortener, FIELD_SEPARATOR};
pub use error::{PathmarksError, Result};
