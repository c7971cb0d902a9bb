use serde::Deserialize;
use serde::Serialize;

/// What a tab is currently displaying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentState {
    pub url: String,
    pub title: String,
    pub private: bool,
}

/// A single browsing session identified by a string id.
///
/// The same shape serves both the regular tab list and the custom-tab
/// list; the two collections are kept strictly apart in [`BrowserState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabState {
    pub id: String,
    pub content: ContentState,
}

impl TabState {
    pub fn new(url: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ContentState {
                url: url.into(),
                title: String::new(),
                private: false,
            },
        }
    }

    pub fn new_private(url: impl Into<String>, id: impl Into<String>) -> Self {
        let mut tab = Self::new(url, id);
        tab.content.private = true;
        tab
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.content.title = title.into();
        self
    }
}

/// Snapshot of every open tab plus the current selection.
///
/// Regular tabs and custom tabs never mix: a custom tab cannot become
/// the selected tab, and id collisions across the two collections are
/// allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserState {
    pub tabs: Vec<TabState>,
    pub custom_tabs: Vec<TabState>,
    pub selected_tab_id: Option<String>,
}

impl BrowserState {
    /// The tab whose id matches `selected_tab_id`, if any.
    ///
    /// Returns `None` when no selection is set or when the selected id no
    /// longer matches a tab (for example after the tab list was cleared).
    pub fn selected_tab(&self) -> Option<&TabState> {
        let id = self.selected_tab_id.as_deref()?;
        self.find_tab(id)
    }

    /// Finds a regular tab by id. Never searches custom tabs.
    pub fn find_tab(&self, id: &str) -> Option<&TabState> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Finds a custom tab by id. Never searches regular tabs.
    pub fn find_custom_tab(&self, id: &str) -> Option<&TabState> {
        self.custom_tabs.iter().find(|tab| tab.id == id)
    }
}
