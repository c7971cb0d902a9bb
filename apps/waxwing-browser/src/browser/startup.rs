use super::*;

pub(crate) fn run() -> Result<(), eframe::Error> {
    let session = SessionStore::new(default_session_root());
    let (initial_state, restore_error) = restore_session(&session);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Waxwing")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Waxwing",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ShellApp::new(initial_state, session, restore_error)))),
    )
}

/// Loads the saved session, falling back to a single default tab on a
/// fresh profile or an unreadable session file.
pub(super) fn restore_session(session: &SessionStore) -> (BrowserState, Option<String>) {
    match session.load() {
        Ok(Some(state)) if !state.tabs.is_empty() => (state, None),
        Ok(_) => (seed_state(), None),
        Err(error) => {
            eprintln!("Waxwing session restore error: {error}");
            (seed_state(), Some(error.to_string()))
        }
    }
}

pub(super) fn seed_state() -> BrowserState {
    BrowserState {
        tabs: vec![TabState::new(DEFAULT_URL, "home")],
        custom_tabs: Vec::new(),
        selected_tab_id: Some("home".to_owned()),
    }
}
