mod common;

use common::{Fixture, ScriptedHost};
use pathmarks::{execute, on_path_changed, Command, Outcome, PathmarksError};

mod favorite_commands {
    use super::*;

    #[test]
    fn add_favorite_stores_shortened_path() {
        let fx = Fixture::new();
        fx.write_shorteners("proj|/repos/myproj\n");
        let mut session = fx.session();
        let mut host = ScriptedHost::default().answering("Work");
        host.selection = vec!["/repos/myproj/src".to_string()];

        let outcome = execute(&mut session, &mut host, Command::AddFavorite).unwrap();

        assert_eq!(outcome, Outcome::Saved("Work|{{proj}}/src".to_string()));
        assert_eq!(fx.favorites(), "Work|{{proj}}/src\n");
    }

    #[test]
    fn add_favorite_under_home_uses_tilde() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::default().answering("Docs");
        host.selection = vec![fx.home().join("docs").display().to_string()];

        execute(&mut session, &mut host, Command::AddFavorite).unwrap();

        assert_eq!(fx.favorites(), "Docs|~/docs\n");
    }

    #[test]
    fn add_favorite_of_a_file_bookmarks_its_directory() {
        let fx = Fixture::new();
        let notes = fx.home().join("notes");
        std::fs::create_dir_all(&notes).unwrap();
        std::fs::write(notes.join("today.txt"), "x").unwrap();

        let mut session = fx.session();
        let mut host = ScriptedHost::default().answering("Notes");
        host.cursor = Some(notes.join("today.txt").display().to_string());

        execute(&mut session, &mut host, Command::AddFavorite).unwrap();

        assert_eq!(fx.favorites(), "Notes|~/notes\n");
    }

    #[test]
    fn add_favorite_appends_without_dedup() {
        let fx = Fixture::new();
        fx.write_favorites("Home|~\n");
        let mut session = fx.session();
        let mut host = ScriptedHost::default().answering("Home").answering("Home");
        host.selection = vec!["/srv/a".to_string()];

        execute(&mut session, &mut host, Command::AddFavorite).unwrap();
        execute(&mut session, &mut host, Command::AddFavorite).unwrap();

        assert_eq!(fx.favorites(), "Home|~\nHome|/srv/a\nHome|/srv/a\n");
    }

    #[test]
    fn cancelled_or_invalid_names_write_nothing() {
        let fx = Fixture::new();
        let mut session = fx.session();

        let mut host = ScriptedHost::default();
        host.selection = vec!["/srv/a".to_string()];
        assert_eq!(execute(&mut session, &mut host, Command::AddFavorite).unwrap(), Outcome::Cancelled);

        let mut host = ScriptedHost::default().answering("a|b");
        host.selection = vec!["/srv/a".to_string()];
        assert_eq!(execute(&mut session, &mut host, Command::AddFavorite).unwrap(), Outcome::Cancelled);
        assert_eq!(host.statuses.len(), 1);

        assert!(!fx.favorites_path().exists());
    }

    #[test]
    fn add_without_selection_is_unchanged() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::default().answering("Nothing");

        let outcome = execute(&mut session, &mut host, Command::AddFavorite).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(host.prompts.len(), 1);
    }

    #[test]
    fn go_to_favorite_expands_alias() {
        let fx = Fixture::new();
        fx.write_favorites("Home|~\nWork|{{proj}}/src\n");
        fx.write_shorteners("proj|/repos/myproj\n");
        let mut session = fx.session();
        let mut host = ScriptedHost::default().picking("wk", "Work");

        let outcome = execute(&mut session, &mut host, Command::GoToFavorite).unwrap();

        assert_eq!(outcome, Outcome::Navigated("/repos/myproj/src".to_string()));
        assert_eq!(host.navigations, ["/repos/myproj/src"]);
        let offered: Vec<_> = host.offered[0].iter().map(|s| s.label.as_str()).collect();
        assert_eq!(offered, ["Work"]);
        assert_eq!(host.statuses, ["Favorite Selection"]);
    }

    #[test]
    fn go_to_favorite_without_file_offers_home() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::default().picking("", "Home");

        let outcome = execute(&mut session, &mut host, Command::GoToFavorite).unwrap();

        assert_eq!(outcome, Outcome::Navigated(fx.home().display().to_string()));
    }

    #[test]
    fn go_to_favorite_first_duplicate_wins() {
        let fx = Fixture::new();
        fx.write_favorites("Dup|/first\nDup|/second\n");
        let mut session = fx.session();
        let mut host = ScriptedHost::default().picking("", "Dup");

        let outcome = execute(&mut session, &mut host, Command::GoToFavorite).unwrap();

        assert_eq!(outcome, Outcome::Navigated("/first".to_string()));
    }

    #[test]
    fn cancelled_picker_navigates_nowhere() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::default().cancelling_search();

        let outcome = execute(&mut session, &mut host, Command::GoToFavorite).unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(host.navigations.is_empty());
    }

    #[test]
    fn unreadable_favorites_file_fails_instead_of_defaulting() {
        let fx = Fixture::new();
        std::fs::create_dir(fx.favorites_path()).unwrap();
        let mut session = fx.session();
        let mut host = ScriptedHost::default().picking("", "Home");

        let result = execute(&mut session, &mut host, Command::GoToFavorite);

        assert!(matches!(result, Err(PathmarksError::Io(_))));
        assert!(host.offered.is_empty());
        assert!(host.navigations.is_empty());
    }

    #[test]
    fn remove_favorite_drops_exact_name_only() {
        let fx = Fixture::new();
        fx.write_favorites("A|/a\nAB|/ab\nB|/b\nA|/a2\n");
        let mut session = fx.session();
        let mut host = ScriptedHost::default().picking("a", "A");

        let outcome = execute(&mut session, &mut host, Command::RemoveFavorite).unwrap();

        assert_eq!(outcome, Outcome::Removed("A".to_string()));
        assert_eq!(fx.favorites(), "AB|/ab\nB|/b\n");
    }
}

mod shortener_commands {
    use super::*;

    #[test]
    fn add_shortener_stores_normalized_absolute_path() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::default().answering("proj");
        host.selection = vec!["/repos/./myproj/".to_string()];

        let outcome = execute(&mut session, &mut host, Command::AddShortener).unwrap();

        assert_eq!(outcome, Outcome::Saved("proj|/repos/myproj".to_string()));
        assert_eq!(fx.shorteners(), "proj|/repos/myproj\n");
    }

    #[test]
    fn remove_shortener_inlines_into_favorites() {
        let fx = Fixture::new();
        fx.write_shorteners("proj|/repos/myproj\n");
        fx.write_favorites("Home|~\nX|{{proj}}/sub\n");
        let mut session = fx.session();
        let mut host = ScriptedHost::default().picking("pr", "proj");

        let outcome = execute(&mut session, &mut host, Command::RemoveShortener).unwrap();

        assert_eq!(outcome, Outcome::Removed("proj".to_string()));
        assert_eq!(fx.favorites(), "Home|~\nX|/repos/myproj/sub\n");
        assert_eq!(fx.shorteners(), "");
    }

    #[test]
    fn remove_shortener_with_none_defined_reports_status() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::default();

        let outcome = execute(&mut session, &mut host, Command::RemoveShortener).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(host.statuses, ["No shorteners are set up."]);
    }
}

mod navigation_commands {
    use super::*;

    #[test]
    fn hot_slot_out_of_range_uses_slot_zero() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::at("/projects/alpha");

        let saved = execute(&mut session, &mut host, Command::SetHotSlot { index: 5 }).unwrap();
        assert_eq!(saved, Outcome::Saved("/projects/alpha".to_string()));

        host.location = Some("/elsewhere".to_string());
        let went = execute(&mut session, &mut host, Command::GoToHotSlot { index: 0 }).unwrap();
        assert_eq!(went, Outcome::Navigated("/projects/alpha".to_string()));
    }

    #[test]
    fn empty_hot_slot_is_unchanged() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::at("/x");

        let outcome = execute(&mut session, &mut host, Command::GoToHotSlot { index: 2 }).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert!(host.navigations.is_empty());
    }

    #[test]
    fn pop_returns_location_before_current() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::at("/c");
        for path in ["/a", "/b", "/c"] {
            assert!(on_path_changed(&mut session, path));
        }

        let outcome = execute(&mut session, &mut host, Command::PopToPrevious { steps: 0 }).unwrap();
        assert_eq!(outcome, Outcome::Navigated("/b".to_string()));

        // The host echoes the pop's navigation back; it must not be recorded.
        assert!(!on_path_changed(&mut session, "/b"));

        let outcome = execute(&mut session, &mut host, Command::PopToPrevious { steps: 0 }).unwrap();
        assert_eq!(outcome, Outcome::Navigated("/a".to_string()));
    }

    #[test]
    fn pop_without_history_reports_status() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::at("/only");
        on_path_changed(&mut session, "/only");

        let outcome = execute(&mut session, &mut host, Command::PopToPrevious { steps: 0 }).unwrap();

        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(host.statuses, ["No earlier directory in history"]);
    }

    #[test]
    fn json_invocations_drive_handlers() {
        let fx = Fixture::new();
        let mut session = fx.session();
        let mut host = ScriptedHost::at("/srv/data");

        let set = Command::from_json(r#"{"command":"set_hot_slot","args":{"index":3}}"#).unwrap();
        execute(&mut session, &mut host, set).unwrap();

        let go = Command::from_json(r#"{"command":"go_to_hot_slot","args":{"index":3}}"#).unwrap();
        assert_eq!(
            execute(&mut session, &mut host, go).unwrap(),
            Outcome::Navigated("/srv/data".to_string())
        );
    }
}
