//! In-memory navigation state: hot slots and back-navigation history.
//!
//! Neither structure is persisted; both live for the lifetime of the host
//! session inside [`Session`](crate::app::Session).

pub mod history;
pub mod hot_slots;

pub use history::{History, DEFAULT_CAPACITY};
pub use hot_slots::{HotSlots, HOT_SLOT_COUNT};
