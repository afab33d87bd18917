use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

/// Width (points) from which the larger "pad" layout is used.
pub const PAD_MIN_WIDTH: f32 = 700.0;

/// Language code whose interface is laid out right-to-left.
const ARABIC: &str = "ar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Phone,
    Pad,
}

impl DeviceClass {
    pub fn from_width(width: f32) -> Self {
        if width >= PAD_MIN_WIDTH {
            DeviceClass::Pad
        } else {
            DeviceClass::Phone
        }
    }
}

/// Theme colours used to tint row widgets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Call-to-action accent (switch thumb when on)
    pub cta: Color32,
    /// Chevrons and secondary values
    pub menu_option: Color32,
    /// Switch thumb when off
    pub light_gray: Color32,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            cta: Color32::from_rgb(74, 158, 255),
            menu_option: Color32::from_rgb(30, 30, 30),
            light_gray: Color32::LIGHT_GRAY,
        }
    }

    pub fn dark() -> Self {
        Self {
            cta: Color32::from_rgb(98, 174, 255),
            menu_option: Color32::from_rgb(230, 230, 230),
            light_gray: Color32::LIGHT_GRAY,
        }
    }

    pub fn for_dark_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// Ambient facts a row reads while it is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEnvironment {
    pub device: DeviceClass,
    /// Interface locale tag, e.g. "ar-EG" or "en-US"
    pub locale: String,
    pub palette: Palette,
}

impl CellEnvironment {
    pub fn new(device: DeviceClass, locale: impl Into<String>, palette: Palette) -> Self {
        Self {
            device,
            locale: locale.into(),
            palette,
        }
    }

    /// Only the two-letter prefix of the locale is compared.
    pub fn is_right_to_left(&self) -> bool {
        self.locale.get(..2) == Some(ARABIC)
    }
}
