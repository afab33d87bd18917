pub mod fonts;
pub mod row;
pub mod screen;

pub use screen::SettingsScreen;
