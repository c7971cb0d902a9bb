//! Session-level operations on the browser state: URL loading use cases
//! and on-disk session persistence.

mod session_store;
mod use_cases;

pub use session_store::SessionStore;
pub use session_store::default_session_root;
pub use use_cases::SessionUseCases;
pub use use_cases::normalize_input_url;
