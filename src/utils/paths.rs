use directories::BaseDirs;
use std::path::PathBuf;

/// Name of the container shared by the app and the keyboard extension.
pub const GROUP_CONTAINER: &str = "group.be.scri.userDefaultsContainer";

/// Application config directory (OS standard)
/// Linux: ~/.config/Scribe
/// macOS: ~/Library/Application Support/Scribe
/// Windows: %APPDATA%\\Scribe
pub fn app_config_dir() -> PathBuf {
    if let Some(base) = BaseDirs::new() {
        return base.config_dir().join("Scribe");
    }
    // Fallback: current working directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Shared preference container: `<config dir>/<group>/preferences.toml`
pub fn group_preferences_path() -> PathBuf {
    app_config_dir()
        .join(GROUP_CONTAINER)
        .join("preferences.toml")
}
