//! Commands the host can dispatch to the plugin.
//!
//! Hosts bind keys to commands with small JSON documents:
//!
//! ```json
//! { "command": "go_to_hot_slot", "args": { "index": 2 } }
//! { "command": "pop_to_previous", "args": { "steps": 1 } }
//! { "command": "add_favorite" }
//! ```
//!
//! Missing or ill-typed arguments fall back to `0`, matching how slot indices
//! are normalized.

use crate::domain::error::{PathmarksError, Result};
use serde::Deserialize;
use serde_json::Value;

/// A user-facing plugin command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Bookmark the selected directory under a prompted name.
    AddFavorite,
    /// Pick a favorite and delete it.
    RemoveFavorite,
    /// Register the selected directory as a `{{name}}` shortener.
    AddShortener,
    /// Pick a shortener and delete it, inlining it into favorites.
    RemoveShortener,
    /// Pick a favorite and navigate to it.
    GoToFavorite,
    /// Remember the current location in a hot slot.
    SetHotSlot { index: i64 },
    /// Navigate to the location stored in a hot slot.
    GoToHotSlot { index: i64 },
    /// Navigate back through the visit history.
    PopToPrevious { steps: usize },
}

/// Wire form of a key-binding invocation.
#[derive(Debug, Deserialize)]
struct Invocation {
    command: String,
    #[serde(default)]
    args: Value,
}

impl Command {
    /// Parses a JSON invocation.
    ///
    /// # Errors
    ///
    /// Returns [`PathmarksError::Command`] for malformed JSON or an unknown name.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmarks::Command;
    ///
    /// let command = Command::from_json(r#"{"command":"set_hot_slot","args":{"index":3}}"#)?;
    /// assert_eq!(command, Command::SetHotSlot { index: 3 });
    /// # Ok::<(), pathmarks::PathmarksError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let invocation: Invocation = serde_json::from_str(json)
            .map_err(|e| PathmarksError::Command(format!("invalid invocation: {e}")))?;
        Self::from_name(&invocation.command, &invocation.args)
    }

    /// Builds a command from its name and argument object.
    ///
    /// Legacy class-style names from older key-binding files
    /// (`set_favorite_directory`, `remove_shortener_directory`, ...) are accepted
    /// as aliases.
    ///
    /// # Errors
    ///
    /// Returns [`PathmarksError::Command`] for an unknown name.
    pub fn from_name(name: &str, args: &Value) -> Result<Self> {
        let int_arg = |key: &str| args.get(key).and_then(Value::as_i64).unwrap_or(0);

        let command = match name {
            "add_favorite" | "set_favorite_directory" => Self::AddFavorite,
            "remove_favorite" | "remove_favorite_directory" => Self::RemoveFavorite,
            "add_shortener" | "set_shorten_directory" => Self::AddShortener,
            "remove_shortener" | "remove_shortener_directory" => Self::RemoveShortener,
            "go_to_favorite" => Self::GoToFavorite,
            "set_hot_slot" => Self::SetHotSlot { index: int_arg("index") },
            "go_to_hot_slot" => Self::GoToHotSlot { index: int_arg("index") },
            "pop_to_previous" => Self::PopToPrevious {
                steps: usize::try_from(int_arg("steps")).unwrap_or(0),
            },
            other => return Err(PathmarksError::Command(format!("unknown command: {other}"))),
        };
        Ok(command)
    }

    /// Parses the console form `name [number]`.
    ///
    /// The optional number is the slot index for hot-slot commands and the
    /// step count for `pop_to_previous`.
    ///
    /// # Errors
    ///
    /// Returns [`PathmarksError::Command`] for an empty line, an unknown name,
    /// or a non-numeric argument.
    pub fn from_words(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words
            .next()
            .ok_or_else(|| PathmarksError::Command("empty command".to_string()))?;

        let number = words
            .next()
            .map(|raw| {
                raw.parse::<i64>()
                    .map_err(|_| PathmarksError::Command(format!("not a number: {raw}")))
            })
            .transpose()?
            .unwrap_or(0);

        let args = serde_json::json!({ "index": number, "steps": number });
        Self::from_name(name, &args)
    }

    /// Snake-case name used in key bindings and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddFavorite => "add_favorite",
            Self::RemoveFavorite => "remove_favorite",
            Self::AddShortener => "add_shortener",
            Self::RemoveShortener => "remove_shortener",
            Self::GoToFavorite => "go_to_favorite",
            Self::SetHotSlot { .. } => "set_hot_slot",
            Self::GoToHotSlot { .. } => "go_to_hot_slot",
            Self::PopToPrevious { .. } => "pop_to_previous",
        }
    }
}
