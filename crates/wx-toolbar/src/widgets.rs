use crate::ToolbarMode;
use wx_session::SessionUseCases;
use wx_state::BrowserStore;
use wx_state::TargetTab;

const EMPTY_URL_PLACEHOLDER: &str = "<empty>";
const TOOLBAR_ROW_HEIGHT: f32 = 28.0;
const GO_BUTTON_RESERVE: f32 = 60.0;
const MIN_FIELD_WIDTH: f32 = 200.0;

/// What the user did to the edit field this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    None,
    Committed,
    Cancelled,
}

/// The address bar. Observes the store for the target tab's URL each
/// frame and renders the display or edit sub-toolbar by mode.
#[derive(Debug, Default)]
pub struct BrowserToolbar {
    mode: ToolbarMode,
}

impl BrowserToolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &ToolbarMode {
        &self.mode
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        store: &BrowserStore,
        use_cases: &SessionUseCases,
        target: &TargetTab,
    ) {
        let url = target.lookup_in_store(store).map(|tab| tab.content.url);

        if let ToolbarMode::Edit { input } = &mut self.mode {
            match BrowserEditToolbar::new(input).show(ui) {
                EditAction::Committed => {
                    if let Some(text) = self.mode.commit() {
                        use_cases.load_url(&text, target);
                    }
                }
                EditAction::Cancelled => self.mode.cancel(),
                EditAction::None => {}
            }
        } else {
            let clicked = BrowserDisplayToolbar::new(url.as_deref()).show(ui);
            if clicked {
                self.mode.enter_edit(url.as_deref().unwrap_or_default());
            }
        }
    }
}

/// Display mode: the current URL as a full-width click target. Returns
/// whether it was clicked (the trigger for entering edit mode).
#[derive(Debug)]
pub struct BrowserDisplayToolbar<'a> {
    url: Option<&'a str>,
}

impl<'a> BrowserDisplayToolbar<'a> {
    pub fn new(url: Option<&'a str>) -> Self {
        Self { url }
    }

    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let text = self.url.unwrap_or(EMPTY_URL_PLACEHOLDER);
        let mut clicked = false;

        ui.horizontal(|ui| {
            let width = ui.available_width().max(MIN_FIELD_WIDTH);
            let response = ui.add_sized(
                [width, TOOLBAR_ROW_HEIGHT],
                egui::Button::new(text).frame(false),
            );
            clicked = response.clicked();
        });

        clicked
    }
}

/// Edit mode: a single-line text field over the caller's buffer plus a
/// Go button. Enter or Go commits, Escape cancels.
#[derive(Debug)]
pub struct BrowserEditToolbar<'a> {
    input: &'a mut String,
}

impl<'a> BrowserEditToolbar<'a> {
    pub fn new(input: &'a mut String) -> Self {
        Self { input }
    }

    pub fn show(self, ui: &mut egui::Ui) -> EditAction {
        let mut action = EditAction::None;

        ui.horizontal(|ui| {
            let width = (ui.available_width() - GO_BUTTON_RESERVE).max(MIN_FIELD_WIDTH);
            let response = ui.add_sized(
                [width, TOOLBAR_ROW_HEIGHT],
                egui::TextEdit::singleline(self.input).hint_text("Enter URL"),
            );
            response.request_focus();

            let pressed_enter =
                response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
            let pressed_escape = ui.input(|input| input.key_pressed(egui::Key::Escape));

            if pressed_enter || ui.button("Go").clicked() {
                action = EditAction::Committed;
            } else if pressed_escape {
                action = EditAction::Cancelled;
            }
        });

        action
    }
}
