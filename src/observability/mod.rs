//! Structured logging to a rotating file.
//!
//! The plugin runs inside a host process that owns stdout and stderr, so log
//! output goes to a file instead:
//!
//! ```text
//! tracing macros → EnvFilter (trace_level) → fmt layer → FileWriter → ~/.local/share/pathmarks/pathmarks.log
//! ```
//!
//! # Modules
//!
//! - `init`: subscriber setup
//! - `file_writer`: size-rotated file sink with backup retention

mod file_writer;
mod init;

pub use init::init_tracing;
