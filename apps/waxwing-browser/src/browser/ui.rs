use super::*;

impl ShellApp {
    pub(super) fn new(
        initial_state: BrowserState,
        session: SessionStore,
        restore_error: Option<String>,
    ) -> Self {
        let store = Arc::new(BrowserStore::new(initial_state));
        let use_cases = SessionUseCases::new(Arc::clone(&store));

        Self {
            store,
            use_cases,
            toolbar: BrowserToolbar::new(),
            session,
            saved_change_count: 0,
            status_line: "Ready".to_owned(),
            last_error: restore_error,
        }
    }

    fn tab_strip_entries(&self) -> Vec<TabStripEntry> {
        self.store.with_state(|state| {
            state
                .tabs
                .iter()
                .map(|tab| TabStripEntry {
                    id: tab.id.clone(),
                    label: tab_strip_label(tab),
                    selected: state.selected_tab_id.as_deref() == Some(tab.id.as_str()),
                })
                .collect()
        })
    }

    fn render_tab_strip(&mut self, ui: &mut egui::Ui) {
        let entries = self.tab_strip_entries();

        ui.horizontal_wrapped(|ui| {
            for entry in &entries {
                if ui.selectable_label(entry.selected, &entry.label).clicked() {
                    self.store.select_tab(&entry.id);
                }
                if ui.small_button("x").clicked() {
                    self.store.remove_tab(&entry.id);
                }
                ui.separator();
            }

            if ui.button("+").clicked() {
                self.use_cases.new_tab("");
            }
            if ui.button("+ private").clicked() {
                self.use_cases.new_private_tab("");
            }
        });
    }

    fn render_page(&self, ui: &mut egui::Ui) {
        let selected = TargetTab::Selected.lookup_in_store(&self.store);
        match selected {
            Some(tab) => {
                if tab.content.title.is_empty() {
                    ui.heading("Untitled");
                } else {
                    ui.heading(&tab.content.title);
                }
                ui.label(&tab.content.url);
                if tab.content.private {
                    ui.colored_label(
                        egui::Color32::from_rgb(148, 102, 196),
                        "Private tab: this session is not saved.",
                    );
                }
            }
            None => {
                ui.label("No tab selected.");
            }
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let (tab_count, private_count, custom_count) = self.store.with_state(|state| {
            let private = state
                .tabs
                .iter()
                .filter(|tab| tab.content.private)
                .count();
            (state.tabs.len(), private, state.custom_tabs.len())
        });

        ui.horizontal_wrapped(|ui| {
            ui.label(format!(
                "{tab_count} tabs ({private_count} private), {custom_count} custom"
            ));
            ui.separator();
            ui.label(&self.status_line);
            if let Some(error) = &self.last_error {
                ui.separator();
                ui.colored_label(
                    egui::Color32::from_rgb(200, 65, 65),
                    format!("Error: {error}"),
                );
            }
        });
    }

    fn save_if_changed(&mut self) {
        if self.store.change_count() != self.saved_change_count {
            self.save_session();
        }
    }

    fn save_session(&mut self) {
        let change_count = self.store.change_count();
        let state = self.store.with_state(BrowserState::clone);

        match self.session.save(&state) {
            Ok(()) => {
                self.saved_change_count = change_count;
                self.status_line = format!("Session saved to {}", self.session.root().display());
                self.last_error = None;
            }
            Err(error) => {
                self.status_line = "Session save failed".to_owned();
                self.last_error = Some(error.to_string());
            }
        }
    }
}

impl Drop for ShellApp {
    fn drop(&mut self) {
        self.save_session();
    }
}

impl eframe::App for ShellApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            self.render_tab_strip(ui);
            ui.horizontal(|ui| {
                self.toolbar
                    .show(ui, &self.store, &self.use_cases, &TargetTab::Selected);
            });
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.render_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_page(ui);
        });

        self.save_if_changed();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_session();
    }
}

fn tab_strip_label(tab: &TabState) -> String {
    let base = if tab.content.title.is_empty() {
        tab.content.url.as_str()
    } else {
        tab.content.title.as_str()
    };

    let mut label = truncate_label(base, TAB_LABEL_MAX_CHARS);
    if tab.content.private {
        label.push_str(PRIVATE_TAB_SUFFIX);
    }
    label
}

fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('\u{2026}');
    truncated
}

#[cfg(test)]
include!("tests.rs");
