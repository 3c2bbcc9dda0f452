//! Host-facing presentation helpers.
//!
//! The plugin draws nothing itself. This layer only prepares what the host's
//! quicksearch palette shows: which labels match a query and where to
//! highlight them.

pub mod picker;

pub use picker::{suggest, Matcher, SkimMatcher, Suggestion};
