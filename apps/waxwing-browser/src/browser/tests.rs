#[cfg(test)]
mod tests {
    use super::{tab_strip_label, truncate_label};
    use crate::browser::ShellApp;
    use crate::browser::startup::restore_session;
    use crate::browser::startup::seed_state;
    use std::time::SystemTime;
    use std::time::UNIX_EPOCH;
    use wx_session::SessionStore;
    use wx_state::TabState;

    fn temp_state_root() -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|value| value.as_nanos())
            .unwrap_or_default();
        std::env::temp_dir().join(format!("waxwing-shell-test-{stamp}"))
    }

    #[test]
    fn truncates_long_labels_with_an_ellipsis() {
        let truncated = truncate_label("a-very-long-page-title-that-keeps-going", 10);
        assert_eq!(truncated.chars().count(), 10);
        assert!(truncated.ends_with('\u{2026}'));
    }

    #[test]
    fn keeps_short_labels_untouched() {
        assert_eq!(truncate_label("short", 10), "short");
    }

    #[test]
    fn tab_labels_prefer_the_title_over_the_url() {
        let titled =
            TabState::new("https://www.example.org", "example").with_title("Example Domain");
        assert_eq!(tab_strip_label(&titled), "Example Domain");

        let untitled = TabState::new("https://www.example.org", "example");
        assert_eq!(tab_strip_label(&untitled), "https://www.example.org");
    }

    #[test]
    fn private_tabs_are_marked_in_the_strip() {
        let tab = TabState::new_private("https://theverge.com", "theverge").with_title("The Verge");
        assert_eq!(tab_strip_label(&tab), "The Verge (private)");
    }

    #[test]
    fn seed_state_selects_the_default_tab() {
        let state = seed_state();
        assert_eq!(
            state.selected_tab().map(|tab| tab.content.url.as_str()),
            Some(crate::browser::DEFAULT_URL)
        );
    }

    #[test]
    fn restore_falls_back_to_the_seed_on_a_fresh_profile() {
        let root = temp_state_root();
        let (state, error) = restore_session(&SessionStore::new(root.clone()));
        assert_eq!(state, seed_state());
        assert!(error.is_none());

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn restore_reports_unreadable_session_files() {
        let root = temp_state_root();
        let wrote = std::fs::create_dir_all(&root)
            .and_then(|()| std::fs::write(root.join("session.json"), "not json"));
        assert!(wrote.is_ok());

        let (state, error) = restore_session(&SessionStore::new(root.clone()));
        assert_eq!(state, seed_state());
        assert!(error.is_some_and(|message| message.contains("session.parse_failed")));

        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn tab_strip_marks_the_selected_entry() {
        let root = temp_state_root();
        let app = ShellApp::new(seed_state(), SessionStore::new(root.clone()), None);

        let entries = app.tab_strip_entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].selected);
        assert_eq!(entries[0].id, "home");

        drop(app);
        let _ = std::fs::remove_dir_all(root);
    }

    #[test]
    fn changed_state_is_persisted_and_restored() {
        let root = temp_state_root();
        let mut app = ShellApp::new(seed_state(), SessionStore::new(root.clone()), None);

        app.use_cases.new_tab("example.com");
        app.save_if_changed();

        let restored = SessionStore::new(root.clone()).load();
        let restored = restored.ok().flatten().unwrap_or_default();
        assert_eq!(restored.tabs.len(), 2);
        assert_eq!(
            restored.selected_tab().map(|tab| tab.content.url.as_str()),
            Some("https://example.com")
        );

        drop(app);
        let _ = std::fs::remove_dir_all(root);
    }
}
