use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::environment::DeviceClass;
use crate::utils::{app_config_dir, group_preferences_path};

/// Layout override; `Auto` picks by window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSetting {
    #[default]
    Auto,
    Phone,
    Pad,
}

impl DeviceSetting {
    pub fn resolve(self, width: f32) -> DeviceClass {
        match self {
            DeviceSetting::Auto => DeviceClass::from_width(width),
            DeviceSetting::Phone => DeviceClass::Phone,
            DeviceSetting::Pad => DeviceClass::Pad,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    #[default]
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    // UI language (auto/en/de/ar)
    pub ui_language: String,
    pub device_class: DeviceSetting,
    pub theme: ThemeSetting,
    // Overrides the shared group container file
    pub preferences_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui_language: "auto".to_string(),
            device_class: DeviceSetting::Auto,
            theme: ThemeSetting::Auto,
            preferences_path: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> PathBuf {
        app_config_dir().join("settings.toml")
    }

    /// Config from the OS config dir; defaults when missing or unreadable.
    pub fn load() -> Self {
        let path = Self::config_path();
        match Self::load_from(&path) {
            Ok(Some(cfg)) => cfg,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Some(toml::from_str(&text)?))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        let text = toml::to_string(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Atomic-ish write: write to temp file then rename
        let tmp_path = path.with_extension("toml.tmp");
        let mut f = std::fs::File::create(&tmp_path)?;
        f.write_all(text.as_bytes())?;
        f.flush()?;
        std::fs::rename(tmp_path, path)?;
        Ok(())
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(group_preferences_path)
    }
}
