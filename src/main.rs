//! Console host for the pathmarks plugin.
//!
//! A minimal stand-in for a file manager: it keeps one "pane" location, reads
//! commands from stdin, and answers prompts and quicksearches on the terminal.
//! Useful for trying the plugin and for scripting the alias files.
//!
//! # Input
//!
//! ```text
//! cd <path>              navigate the pane (reported to the history listener)
//! select <path>...       set the pane selection
//! pwd                    print the pane location
//! <command> [n]          run a command, e.g. `go_to_favorite`, `pop_to_previous 1`
//! {"command": ...}       run a JSON key-binding invocation
//! quit                   exit
//! ```
//!
//! In a quicksearch, type a query, then a number to pick (empty picks the first,
//! `-` cancels).

use std::io::{self, BufRead, Write};

use pathmarks::infrastructure::get_config_file;
use pathmarks::ui::Suggestion;
use pathmarks::{execute, on_path_changed, Command, Config, Host, Outcome, Session};

/// Terminal-backed [`Host`] implementation.
struct ConsoleHost<R> {
    input: R,
    location: Option<String>,
    selection: Vec<String>,
    /// Navigation performed by a command, reported to the listener afterwards.
    pending_visit: Option<String>,
}

impl<R: BufRead> ConsoleHost<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            location: std::env::current_dir()
                .ok()
                .map(|p| p.to_string_lossy().into_owned()),
            selection: Vec::new(),
            pending_visit: None,
        }
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl<R: BufRead> Host for ConsoleHost<R> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.read_line(&format!("{message} "))
    }

    fn quicksearch(&mut self, candidates: &dyn Fn(&str) -> Vec<Suggestion>) -> Option<String> {
        let query = self.read_line("query> ")?;
        let suggestions = candidates(&query);
        if suggestions.is_empty() {
            println!("  (no matches)");
            return None;
        }

        for (i, suggestion) in suggestions.iter().enumerate() {
            println!("  {}) {}", i + 1, render_highlight(suggestion));
        }

        let answer = self.read_line("pick> ")?;
        let answer = answer.trim();
        if answer == "-" {
            return None;
        }
        let index = if answer.is_empty() {
            0
        } else {
            answer.parse::<usize>().ok()?.checked_sub(1)?
        };
        suggestions.get(index).map(|s| s.label.clone())
    }

    fn show_status(&mut self, message: &str) {
        println!("[{message}]");
    }

    fn clear_status(&mut self) {}

    fn current_location(&self) -> Option<String> {
        self.location.clone()
    }

    fn navigate(&mut self, location: &str) {
        println!("-> {location}");
        self.location = Some(location.to_string());
        self.pending_visit = Some(location.to_string());
    }

    fn selected_files(&self) -> Vec<String> {
        self.selection.clone()
    }

    fn file_under_cursor(&self) -> Option<String> {
        self.location.clone()
    }
}

/// Brackets highlighted characters: `[W]or[k]`.
fn render_highlight(suggestion: &Suggestion) -> String {
    suggestion
        .label
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if suggestion.highlight.contains(&i) {
                format!("[{c}]")
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn run_line<R: BufRead>(session: &mut Session, host: &mut ConsoleHost<R>, line: &str) {
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    match word {
        "cd" => {
            let target = rest.trim();
            host.location = Some(target.to_string());
            host.selection.clear();
            on_path_changed(session, target);
        }
        "select" => {
            host.selection = rest.split_whitespace().map(String::from).collect();
        }
        "pwd" => println!("{}", host.location.as_deref().unwrap_or("(none)")),
        _ => {
            let parsed = if line.starts_with('{') {
                Command::from_json(line)
            } else {
                Command::from_words(line)
            };

            let command = match parsed {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{e}");
                    return;
                }
            };

            match execute(session, host, command) {
                Ok(Outcome::Navigated(_)) => {}
                Ok(outcome) => println!("{outcome:?}"),
                Err(e) => {
                    tracing::error!(error = %e, command = command.name(), "command failed");
                    eprintln!("{e}");
                }
            }

            if let Some(visit) = host.pending_visit.take() {
                on_path_changed(session, &visit);
            }
        }
    }
}

fn main() {
    let config = Config::load_file(&get_config_file()).unwrap_or_else(|e| {
        eprintln!("{e}; using default configuration");
        Config::default()
    });
    pathmarks::observability::init_tracing(&config);

    let span = tracing::debug_span!("console_host");
    let _guard = span.entered();

    let mut session = pathmarks::initialize(&config);
    let stdin = io::stdin();
    let mut host = ConsoleHost::new(stdin.lock());

    if let Some(start) = host.current_location() {
        on_path_changed(&mut session, &start);
    }

    while let Some(line) = host.read_line("pathmarks> ") {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        run_line(&mut session, &mut host, line);
    }

    tracing::debug!("console host exiting");
}
