//! Address-bar toolbar widgets.
//!
//! The toolbar is a two-state machine: display mode shows the target
//! tab's URL, edit mode holds a local text buffer seeded from that URL.
//! Clicking the URL enters edit mode; committing the buffer (Enter or the
//! Go button) loads it through the session use cases and drops back to
//! display mode.

mod mode;
mod widgets;

pub use mode::ToolbarMode;
pub use widgets::BrowserDisplayToolbar;
pub use widgets::BrowserEditToolbar;
pub use widgets::BrowserToolbar;
pub use widgets::EditAction;
