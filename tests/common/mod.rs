//! Shared fixtures: an isolated home directory and a scripted host.

#![allow(dead_code)]

use pathmarks::storage::FlatFileStore;
use pathmarks::ui::Suggestion;
use pathmarks::{Host, Session};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary home directory holding the two alias files.
pub struct Fixture {
    pub home: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp home"),
        }
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn favorites_path(&self) -> PathBuf {
        self.home().join(".favoritedirs")
    }

    pub fn shorteners_path(&self) -> PathBuf {
        self.home().join(".shortenerdirs")
    }

    pub fn write_favorites(&self, contents: &str) {
        std::fs::write(self.favorites_path(), contents).expect("write favorites");
    }

    pub fn write_shorteners(&self, contents: &str) {
        std::fs::write(self.shorteners_path(), contents).expect("write shorteners");
    }

    pub fn favorites(&self) -> String {
        std::fs::read_to_string(self.favorites_path()).unwrap_or_default()
    }

    pub fn shorteners(&self) -> String {
        std::fs::read_to_string(self.shorteners_path()).unwrap_or_default()
    }

    pub fn session(&self) -> Session {
        let store = FlatFileStore::new(self.favorites_path(), self.shorteners_path());
        Session::new(Box::new(store), self.home(), 10)
    }
}

/// Host double answering prompts and quicksearches from queued scripts.
#[derive(Default)]
pub struct ScriptedHost {
    pub location: Option<String>,
    pub selection: Vec<String>,
    pub cursor: Option<String>,
    pub prompts: VecDeque<Option<String>>,
    /// `(query, label to pick)`; a `None` pick cancels.
    pub searches: VecDeque<(String, Option<String>)>,
    pub offered: Vec<Vec<Suggestion>>,
    pub statuses: Vec<String>,
    pub navigations: Vec<String>,
}

impl ScriptedHost {
    pub fn at(location: &str) -> Self {
        Self {
            location: Some(location.to_string()),
            ..Self::default()
        }
    }

    pub fn answering(mut self, answer: &str) -> Self {
        self.prompts.push_back(Some(answer.to_string()));
        self
    }

    pub fn picking(mut self, query: &str, label: &str) -> Self {
        self.searches.push_back((query.to_string(), Some(label.to_string())));
        self
    }

    pub fn cancelling_search(mut self) -> Self {
        self.searches.push_back((String::new(), None));
        self
    }
}

impl Host for ScriptedHost {
    fn prompt(&mut self, _message: &str) -> Option<String> {
        self.prompts.pop_front().flatten()
    }

    fn quicksearch(&mut self, candidates: &dyn Fn(&str) -> Vec<Suggestion>) -> Option<String> {
        let (query, pick) = self.searches.pop_front()?;
        let offered = candidates(&query);
        let chosen = pick.filter(|label| offered.iter().any(|s| &s.label == label));
        self.offered.push(offered);
        chosen
    }

    fn show_status(&mut self, message: &str) {
        self.statuses.push(message.to_string());
    }

    fn clear_status(&mut self) {}

    fn current_location(&self) -> Option<String> {
        self.location.clone()
    }

    fn navigate(&mut self, location: &str) {
        self.location = Some(location.to_string());
        self.navigations.push(location.to_string());
    }

    fn selected_files(&self) -> Vec<String> {
        self.selection.clone()
    }

    fn file_under_cursor(&self) -> Option<String> {
        self.cursor.clone()
    }
}
