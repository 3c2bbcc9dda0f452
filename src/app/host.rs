//! The host file manager, as seen from the plugin.
//!
//! Everything the plugin cannot do itself goes through [`Host`]: dialogs, the
//! quicksearch palette, the status bar, and the file pane. Locations are opaque
//! strings; a pane may show a local directory or a remote resource locator, and
//! the plugin never interprets them beyond the path codec.

use crate::ui::Suggestion;

/// Services the host application provides to command handlers.
///
/// Calls are synchronous. A prompt or quicksearch blocks until the user answers,
/// which is the host's modal interaction and not the plugin's concern.
pub trait Host {
    /// Shows a modal text prompt. Returns `None` when the user cancels.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Shows the quicksearch palette.
    ///
    /// `candidates` produces the labels to offer for the live query string; the
    /// host calls it as the user types. Returns the chosen label, or `None` when
    /// the user cancels.
    fn quicksearch(&mut self, candidates: &dyn Fn(&str) -> Vec<Suggestion>) -> Option<String>;

    /// Shows a transient status message.
    fn show_status(&mut self, message: &str);

    /// Clears the status message.
    fn clear_status(&mut self);

    /// Location currently shown in the active pane.
    fn current_location(&self) -> Option<String>;

    /// Navigates the active pane.
    ///
    /// The host is expected to report the change back through
    /// [`on_path_changed`](crate::app::handler::on_path_changed) like any other
    /// directory change.
    fn navigate(&mut self, location: &str);

    /// Files explicitly selected in the active pane, in pane order.
    fn selected_files(&self) -> Vec<String>;

    /// File under the pane cursor, used when nothing is selected.
    fn file_under_cursor(&self) -> Option<String>;
}
