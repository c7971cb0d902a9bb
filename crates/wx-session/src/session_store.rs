use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use wx_core::ShellError;
use wx_core::ShellResult;
use wx_state::BrowserState;

const SESSION_FILE: &str = "session.json";

/// Saves and restores the tab session as JSON under a state directory.
///
/// Private tabs never touch disk, and custom tabs are skipped entirely:
/// they belong to whatever external surface launched them, not to the
/// restored window session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn save(&self, state: &BrowserState) -> ShellResult<()> {
        let persisted = persistable_state(state);
        let json = serde_json::to_string_pretty(&persisted).map_err(|error| {
            ShellError::new(
                "session.serialize_failed",
                format!("failed to serialize session: {error}"),
            )
        })?;

        fs::create_dir_all(&self.root).map_err(|error| {
            ShellError::new(
                "session.dir_create_failed",
                format!(
                    "failed to create state directory `{}`: {error}",
                    self.root.display()
                ),
            )
        })?;

        let path = self.session_path();
        fs::write(&path, json).map_err(|error| {
            ShellError::new(
                "session.save_failed",
                format!("failed to write `{}`: {error}", path.display()),
            )
        })
    }

    /// Loads the previously saved session. `Ok(None)` means no session
    /// has been saved yet.
    pub fn load(&self) -> ShellResult<Option<BrowserState>> {
        let path = self.session_path();
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(ShellError::new(
                    "session.load_failed",
                    format!("failed to read `{}`: {error}", path.display()),
                ));
            }
        };

        let state = serde_json::from_str(&json).map_err(|error| {
            ShellError::new(
                "session.parse_failed",
                format!("failed to parse `{}`: {error}", path.display()),
            )
        })?;
        Ok(Some(state))
    }

    fn session_path(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }
}

/// Default session root, overridable through `WAXWING_STATE_DIR`.
pub fn default_session_root() -> PathBuf {
    if let Some(override_root) = std::env::var_os("WAXWING_STATE_DIR") {
        return PathBuf::from(override_root);
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".waxwing")
}

fn persistable_state(state: &BrowserState) -> BrowserState {
    let tabs: Vec<_> = state
        .tabs
        .iter()
        .filter(|tab| !tab.content.private)
        .cloned()
        .collect();

    let selected_survives = state
        .selected_tab_id
        .as_deref()
        .is_some_and(|id| tabs.iter().any(|tab| tab.id == id));
    let selected_tab_id = if selected_survives {
        state.selected_tab_id.clone()
    } else {
        tabs.first().map(|tab| tab.id.clone())
    };

    BrowserState {
        tabs,
        custom_tabs: Vec::new(),
        selected_tab_id,
    }
}
