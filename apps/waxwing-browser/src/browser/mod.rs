use eframe::egui;
use std::sync::Arc;
use wx_session::SessionStore;
use wx_session::SessionUseCases;
use wx_session::default_session_root;
use wx_state::BrowserState;
use wx_state::BrowserStore;
use wx_state::TabState;
use wx_state::TargetTab;
use wx_toolbar::BrowserToolbar;

include!("constants.rs");
include!("types.rs");

mod startup;
mod ui;

pub(crate) use startup::run;
