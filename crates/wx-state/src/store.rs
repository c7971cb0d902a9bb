use crate::BrowserState;
use crate::TabState;
use crate::TargetTab;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Mutex-guarded holder for the shared [`BrowserState`] snapshot.
///
/// UI code observes the state once per frame through [`with_state`];
/// mutations go through the explicit methods below, each of which bumps a
/// change counter so callers can cheaply detect whether anything moved
/// since they last looked.
///
/// [`with_state`]: BrowserStore::with_state
#[derive(Debug, Default)]
pub struct BrowserStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    state: BrowserState,
    change_count: u64,
}

impl BrowserStore {
    pub fn new(initial: BrowserState) -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                state: initial,
                change_count: 0,
            }),
        }
    }

    /// Observes the current state snapshot without cloning it.
    pub fn with_state<R>(&self, observe: impl FnOnce(&BrowserState) -> R) -> R {
        observe(&self.lock().state)
    }

    /// Number of mutations applied so far. Unchanged count means an
    /// unchanged snapshot.
    pub fn change_count(&self) -> u64 {
        self.lock().change_count
    }

    /// Appends a regular tab, optionally selecting it.
    pub fn add_tab(&self, tab: TabState, select: bool) {
        self.mutate(|state| {
            if select {
                state.selected_tab_id = Some(tab.id.clone());
            }
            state.tabs.push(tab);
            true
        });
    }

    /// Appends a custom tab. Custom tabs are never selectable.
    pub fn add_custom_tab(&self, tab: TabState) {
        self.mutate(|state| {
            state.custom_tabs.push(tab);
            true
        });
    }

    /// Selects the regular tab with the given id. Unknown ids leave the
    /// selection untouched and return `false`.
    pub fn select_tab(&self, id: &str) -> bool {
        self.mutate(|state| {
            if state.find_tab(id).is_none() {
                return false;
            }
            if state.selected_tab_id.as_deref() == Some(id) {
                return false;
            }
            state.selected_tab_id = Some(id.to_owned());
            true
        })
    }

    /// Removes a regular tab. When the removed tab was selected, the
    /// selection moves to its list neighbor (next tab, or the new last
    /// tab), or clears when no tabs remain.
    pub fn remove_tab(&self, id: &str) -> bool {
        self.mutate(|state| {
            let Some(index) = state.tabs.iter().position(|tab| tab.id == id) else {
                return false;
            };
            state.tabs.remove(index);

            if state.selected_tab_id.as_deref() == Some(id) {
                let neighbor = index.min(state.tabs.len().saturating_sub(1));
                state.selected_tab_id = state.tabs.get(neighbor).map(|tab| tab.id.clone());
            }
            true
        })
    }

    /// Removes a custom tab by id.
    pub fn remove_custom_tab(&self, id: &str) -> bool {
        self.mutate(|state| {
            let Some(index) = state.custom_tabs.iter().position(|tab| tab.id == id) else {
                return false;
            };
            state.custom_tabs.remove(index);
            true
        })
    }

    /// Removes every regular tab and clears the selection. Custom tabs
    /// are left alone.
    pub fn remove_all_tabs(&self) {
        self.mutate(|state| {
            if state.tabs.is_empty() && state.selected_tab_id.is_none() {
                return false;
            }
            state.tabs.clear();
            state.selected_tab_id = None;
            true
        });
    }

    /// Writes a new URL into whichever tab the target resolves to.
    /// Returns `false` when the target matches nothing.
    pub fn update_url(&self, target: &TargetTab, url: &str) -> bool {
        self.mutate(|state| {
            let Some(tab) = find_target_mut(state, target) else {
                return false;
            };
            if tab.content.url == url {
                return false;
            }
            tab.content.url = url.to_owned();
            true
        })
    }

    fn mutate(&self, apply: impl FnOnce(&mut BrowserState) -> bool) -> bool {
        let mut inner = self.lock();
        let changed = apply(&mut inner.state);
        if changed {
            inner.change_count = inner.change_count.saturating_add(1);
        }
        changed
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn find_target_mut<'a>(
    state: &'a mut BrowserState,
    target: &TargetTab,
) -> Option<&'a mut TabState> {
    match target {
        TargetTab::Selected => {
            let id = state.selected_tab_id.clone()?;
            state.tabs.iter_mut().find(|tab| tab.id == id)
        }
        TargetTab::Pinned(id) => state.tabs.iter_mut().find(|tab| tab.id == *id),
        TargetTab::Custom(id) => state.custom_tabs.iter_mut().find(|tab| tab.id == *id),
    }
}
