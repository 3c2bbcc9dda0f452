//! Infrastructure layer for filesystem and environment interactions.
//!
//! Home, data, and configuration directory resolution plus the lexical path
//! helpers the codec builds on.

pub mod paths;

pub use paths::{
    expand_tilde, get_config_file, get_data_dir, home_dir, normalize, relative_to,
};
