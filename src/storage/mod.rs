//! Storage layer for favorites and shorteners.
//!
//! # Modules
//!
//! - `backend`: [`AliasStore`] trait the command handlers depend on
//! - `flat_file`: [`FlatFileStore`], the two-text-file implementation
//! - `line_file`: whole-file line reads, appends, and atomic rewrites

pub mod backend;
pub mod flat_file;
pub mod line_file;

pub use backend::AliasStore;
pub use flat_file::FlatFileStore;
pub use line_file::LineFile;
