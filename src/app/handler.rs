//! Command handlers and the directory-change listener.
//!
//! Handlers are orchestration only: ask the host for input, go through the
//! alias store and path codec, and tell the host where to navigate. Each call
//! runs to completion before the host dispatches the next one.
//!
//! # Example
//!
//! ```no_run
//! use pathmarks::app::{execute, Host, Session};
//! use pathmarks::Command;
//!
//! fn on_key(session: &mut Session, host: &mut dyn Host) -> pathmarks::Result<()> {
//!     let outcome = execute(session, host, Command::GoToFavorite)?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

use crate::app::{Command, Host, Session};
use crate::domain::error::Result;
use crate::domain::{Favorite, LineRecord, Shortener, FIELD_SEPARATOR};
use crate::infrastructure::paths::normalize;
use crate::ui::suggest;
use std::path::Path;

/// Observable effect of a handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The pane was sent to this location.
    Navigated(String),
    /// A record line or hot-slot location was stored.
    Saved(String),
    /// The named entry was deleted.
    Removed(String),
    /// The user dismissed a prompt or picker.
    Cancelled,
    /// Nothing applicable: no selection, unknown name, empty slot, or no history.
    Unchanged,
}

/// Runs `command` against `session`, using `host` for all user interaction.
///
/// # Errors
///
/// Propagates alias store I/O failures; everything else resolves to an [`Outcome`].
pub fn execute(session: &mut Session, host: &mut dyn Host, command: Command) -> Result<Outcome> {
    let _span = tracing::debug_span!("execute", command = command.name()).entered();

    let outcome = match command {
        Command::AddFavorite => add_favorite(session, host),
        Command::RemoveFavorite => remove_favorite(session, host),
        Command::AddShortener => add_shortener(session, host),
        Command::RemoveShortener => remove_shortener(session, host),
        Command::GoToFavorite => go_to_favorite(session, host),
        Command::SetHotSlot { index } => Ok(set_hot_slot(session, host, index)),
        Command::GoToHotSlot { index } => Ok(go_to_hot_slot(session, host, index)),
        Command::PopToPrevious { steps } => Ok(pop_to_previous(session, host, steps)),
    };

    match &outcome {
        Ok(outcome) => tracing::debug!(outcome = ?outcome, "command handled"),
        Err(e) => tracing::debug!(error = %e, "command failed"),
    }
    outcome
}

/// Listener for every directory change in the active pane.
///
/// Returns `false` when the change was the echo of a pop and was not recorded.
pub fn on_path_changed(session: &mut Session, location: &str) -> bool {
    let recorded = session.history_mut().visit(location);
    tracing::trace!(location = %location, recorded = recorded, "path changed");
    recorded
}

/// Directory the add commands operate on.
///
/// The first selected file wins, then the file under the cursor. A regular file
/// stands for its parent directory.
fn selection_target(host: &dyn Host) -> Option<String> {
    let target = host
        .selected_files()
        .into_iter()
        .next()
        .or_else(|| host.file_under_cursor())?;

    let path = Path::new(&target);
    if path.is_file() {
        path.parent().map(|p| p.to_string_lossy().into_owned())
    } else {
        Some(target)
    }
}

/// Prompts for a record name; `None` on cancel, blank input, or a separator.
fn prompt_name(host: &mut dyn Host, message: &str) -> Option<String> {
    let name = host.prompt(message)?.trim().to_string();
    if name.is_empty() {
        return None;
    }
    if name.contains(FIELD_SEPARATOR) {
        host.show_status(&format!("Names cannot contain '{FIELD_SEPARATOR}'"));
        return None;
    }
    Some(name)
}

/// Opens the quicksearch over `labels` with a status line shown meanwhile.
fn pick(session: &Session, host: &mut dyn Host, title: &str, labels: &[String]) -> Option<String> {
    let matcher = session.matcher();
    host.show_status(title);
    let choice = host.quicksearch(&|query: &str| suggest(labels, query, matcher));
    host.clear_status();
    choice
}

fn add_favorite(session: &Session, host: &mut dyn Host) -> Result<Outcome> {
    let Some(target) = selection_target(host) else {
        return Ok(Outcome::Unchanged);
    };
    let expression = session.shorten(&target)?;

    let Some(name) = prompt_name(host, "Name this Favorite:") else {
        return Ok(Outcome::Cancelled);
    };

    let favorite = Favorite::new(name, expression);
    session.store().append_favorite(&favorite)?;
    Ok(Outcome::Saved(favorite.to_line()))
}

fn add_shortener(session: &Session, host: &mut dyn Host) -> Result<Outcome> {
    let Some(target) = selection_target(host) else {
        return Ok(Outcome::Unchanged);
    };
    let path = normalize(Path::new(&target)).to_string_lossy().into_owned();

    let Some(name) = prompt_name(host, "Name this Directory Shortener:") else {
        return Ok(Outcome::Cancelled);
    };

    let shortener = Shortener::new(name, path);
    session.store().append_shortener(&shortener)?;
    Ok(Outcome::Saved(shortener.to_line()))
}

fn remove_favorite(session: &Session, host: &mut dyn Host) -> Result<Outcome> {
    let names: Vec<String> = session
        .store()
        .load_favorites()?
        .into_iter()
        .map(|f| f.name)
        .collect();

    let Some(name) = pick(session, host, "Remove Favorite Directory", &names) else {
        return Ok(Outcome::Cancelled);
    };

    if session.store().remove_favorite_by_name(&name)? == 0 {
        return Ok(Outcome::Unchanged);
    }
    Ok(Outcome::Removed(name))
}

fn remove_shortener(session: &Session, host: &mut dyn Host) -> Result<Outcome> {
    let names: Vec<String> = session
        .store()
        .load_shorteners()?
        .into_iter()
        .map(|s| s.name)
        .collect();

    if names.is_empty() {
        host.show_status("No shorteners are set up.");
        return Ok(Outcome::Unchanged);
    }

    let Some(name) = pick(session, host, "Remove Shortener Directory", &names) else {
        return Ok(Outcome::Cancelled);
    };

    Ok(session
        .store()
        .remove_shortener_by_name(&name)?
        .map_or(Outcome::Unchanged, |removed| Outcome::Removed(removed.name)))
}

fn go_to_favorite(session: &Session, host: &mut dyn Host) -> Result<Outcome> {
    let names: Vec<String> = session
        .store()
        .load_favorites()?
        .into_iter()
        .map(|f| f.name)
        .collect();

    let Some(name) = pick(session, host, "Favorite Selection", &names) else {
        return Ok(Outcome::Cancelled);
    };

    // Re-read: the file may have changed while the picker was open.
    let Some(favorite) = session
        .store()
        .load_favorites()?
        .into_iter()
        .find(|f| f.name == name)
    else {
        return Ok(Outcome::Unchanged);
    };

    let target = session.expand(&favorite.path_expression)?;
    host.navigate(&target);
    Ok(Outcome::Navigated(target))
}

fn set_hot_slot(session: &mut Session, host: &mut dyn Host, index: i64) -> Outcome {
    let Some(location) = host.current_location() else {
        return Outcome::Unchanged;
    };

    let slot = session.hot_slots_mut().set(index, location.clone());
    host.show_status(&format!("Hot slot {slot} set to {location}"));
    Outcome::Saved(location)
}

fn go_to_hot_slot(session: &Session, host: &mut dyn Host, index: i64) -> Outcome {
    let Some(location) = session.hot_slots().get(index).map(String::from) else {
        host.show_status("Hot slot is empty");
        return Outcome::Unchanged;
    };

    host.navigate(&location);
    Outcome::Navigated(location)
}

fn pop_to_previous(session: &mut Session, host: &mut dyn Host, steps: usize) -> Outcome {
    let Some(location) = session.history_mut().pop_back(steps) else {
        host.show_status("No earlier directory in history");
        return Outcome::Unchanged;
    };

    host.navigate(&location);
    Outcome::Navigated(location)
}
