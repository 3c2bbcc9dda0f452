//! Application layer coordinating host interaction, state, and commands.
//!
//! This module sits between the host shim (main.rs or an embedding file
//! manager) and the storage/codec/navigation layers.
//!
//! ```text
//! Host key binding → Command → execute(Session, Host) → store / codec / history → Host::navigate
//!                                                                                  │
//! Host directory change ←──────────────────────────────────────────────────────────┘
//!         └→ on_path_changed(Session) → History::visit
//! ```
//!
//! # Modules
//!
//! - [`command`]: Commands and their key-binding JSON form
//! - [`handler`]: Command handlers and the directory-change listener
//! - [`host`]: The [`Host`] trait every embedding implements
//! - [`state`]: [`Session`], the per-host-session state container

pub mod command;
pub mod handler;
pub mod host;
pub mod state;

pub use command::Command;
pub use handler::{execute, on_path_changed, Outcome};
pub use host::Host;
pub use state::Session;
