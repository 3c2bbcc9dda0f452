//! Path codec: shortening raw paths and expanding stored path expressions.
//!
//! - `alias`: `{{name}}` token parsing and inlining
//! - `path_codec`: [`PathCodec`], the shorten/expand pair

pub mod alias;
pub mod path_codec;

pub use alias::{find_token, inline_alias, AliasToken};
pub use path_codec::PathCodec;
