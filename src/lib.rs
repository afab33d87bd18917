pub mod cell;
pub mod config;
pub mod environment;
pub mod gui;
pub mod i18n;
pub mod languages;
pub mod menu;
pub mod prefs;
pub mod section;
pub mod utils;

pub use cell::{SettingsRowCell, REUSE_IDENTIFIER};
pub use prefs::Preferences;
pub use section::{Section, SectionState, UserInteractiveState};
