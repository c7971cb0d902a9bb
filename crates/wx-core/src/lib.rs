//! Shared primitives used across Waxwing crates.

use core::fmt;

/// Result alias used across the workspace.
pub type ShellResult<T> = Result<T, ShellError>;

/// Top-level error type for the browser shell.
///
/// Tab lookups that find nothing are not errors; they return `None`.
/// `ShellError` covers operations that can genuinely fail, like session
/// persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellError {
    pub code: &'static str,
    pub message: String,
}

impl ShellError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ShellError {}
