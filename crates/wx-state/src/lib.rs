//! In-memory browser state: tab model, snapshot store, and target-tab
//! resolution.

mod state;
mod store;
mod target;

pub use state::BrowserState;
pub use state::ContentState;
pub use state::TabState;
pub use store::BrowserStore;
pub use target::TargetTab;
