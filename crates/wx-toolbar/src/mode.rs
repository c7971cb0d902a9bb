/// Toolbar UI mode. Edit mode owns the local text buffer; the buffer
/// never writes to the browser state until it is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ToolbarMode {
    #[default]
    Display,
    Edit {
        input: String,
    },
}

impl ToolbarMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    /// Enters edit mode with the buffer seeded from the current URL.
    /// Already-active edit buffers are left untouched.
    pub fn enter_edit(&mut self, seed: &str) {
        if self.is_editing() {
            return;
        }
        *self = Self::Edit {
            input: seed.to_owned(),
        };
    }

    /// Leaves edit mode, returning the committed buffer. Returns `None`
    /// in display mode.
    pub fn commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Edit { input } => Some(input),
            Self::Display => None,
        }
    }

    /// Leaves edit mode, discarding the buffer.
    pub fn cancel(&mut self) {
        *self = Self::Display;
    }
}
