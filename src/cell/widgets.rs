use eframe::egui::Color32;

use crate::environment::DeviceClass;

/// Text element of a row. A detached label is not drawn at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: Option<String>,
    pub color: Option<Color32>,
    pub font_size: f32,
    pub attached: bool,
}

impl Label {
    fn new(font_size: f32) -> Self {
        Self {
            text: None,
            color: None,
            font_size,
            attached: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.attached && self.text.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chevron {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    pub icon: Option<Chevron>,
    pub tint: Option<Color32>,
    pub size: f32,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToggleSwitch {
    pub is_on: bool,
    pub hidden: bool,
    /// Track colour while on
    pub on_tint: Color32,
    pub thumb_tint: Color32,
}

/// Sizes that differ between the phone and pad layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutMetrics {
    title: f32,
    subtitle: f32,
    description: f32,
    icon: f32,
}

impl LayoutMetrics {
    const PHONE: LayoutMetrics = LayoutMetrics {
        title: 16.0,
        subtitle: 14.0,
        description: 12.0,
        icon: 14.0,
    };
    const PAD: LayoutMetrics = LayoutMetrics {
        title: 21.0,
        subtitle: 18.0,
        description: 16.0,
        icon: 18.0,
    };
}

/// The one widget group a bound row draws with.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSet {
    pub layout: DeviceClass,
    pub title: Label,
    pub subtitle: Label,
    pub icon: ImageView,
    pub toggle: ToggleSwitch,
    pub description: Label,
}

impl WidgetSet {
    /// Build the layout for `device`; the other layout is never instantiated.
    pub fn for_device(device: DeviceClass) -> Self {
        let m = match device {
            DeviceClass::Pad => LayoutMetrics::PAD,
            DeviceClass::Phone => LayoutMetrics::PHONE,
        };
        Self {
            layout: device,
            title: Label::new(m.title),
            subtitle: Label::new(m.subtitle),
            icon: ImageView {
                icon: None,
                tint: None,
                size: m.icon,
                hidden: false,
            },
            toggle: ToggleSwitch {
                is_on: false,
                hidden: true,
                on_tint: Color32::TRANSPARENT,
                thumb_tint: Color32::LIGHT_GRAY,
            },
            description: Label::new(m.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_layout_is_larger() {
        let phone = WidgetSet::for_device(DeviceClass::Phone);
        let pad = WidgetSet::for_device(DeviceClass::Pad);
        assert_eq!(phone.layout, DeviceClass::Phone);
        assert_eq!(pad.layout, DeviceClass::Pad);
        assert!(pad.title.font_size > phone.title.font_size);
        assert!(pad.description.font_size > phone.description.font_size);
    }

    #[test]
    fn empty_label_is_not_visible() {
        let set = WidgetSet::for_device(DeviceClass::Phone);
        assert!(!set.description.is_visible());
    }
}
