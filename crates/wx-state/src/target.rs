use crate::BrowserState;
use crate::BrowserStore;
use crate::TabState;

/// Which tab an action (toolbar edit, URL load) should apply to.
///
/// Resolution is a pure lookup: a target that matches nothing resolves to
/// `None`, never an error. `Pinned` only ever matches regular tabs and
/// `Custom` only ever matches custom tabs, even when ids collide across
/// the two collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetTab {
    /// The currently selected regular tab.
    Selected,
    /// A regular tab with a fixed id.
    Pinned(String),
    /// A custom tab with a fixed id.
    Custom(String),
}

impl TargetTab {
    /// Resolves the target against a state snapshot.
    pub fn lookup_in<'a>(&self, state: &'a BrowserState) -> Option<&'a TabState> {
        match self {
            Self::Selected => state.selected_tab(),
            Self::Pinned(id) => state.find_tab(id),
            Self::Custom(id) => state.find_custom_tab(id),
        }
    }

    /// Resolves the target against the live store, cloning the match out
    /// of the lock.
    pub fn lookup_in_store(&self, store: &BrowserStore) -> Option<TabState> {
        store.with_state(|state| self.lookup_in(state).cloned())
    }
}
