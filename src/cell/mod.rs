//! Settings row: binds a [`Section`] to one widget set and keeps its toggle in
//! sync with the shared keyboard preferences.

pub mod widgets;

use eframe::egui::Color32;

use crate::environment::{CellEnvironment, Palette};
use crate::i18n;
use crate::languages;
use crate::prefs::{BoolPreference, Preferences, ALL_LANGUAGES};
use crate::section::{Section, SectionState, UserInteractiveState};

pub use widgets::{Chevron, ImageView, Label, ToggleSwitch, WidgetSet};

/// Registration name the host list uses for this row type.
pub const REUSE_IDENTIFIER: &str = "SettingsRowCell";

/// Alpha applied to the accent colour for the switch track.
const SWITCH_TRACK_ALPHA: f32 = 0.4;

/// Display name used when the stored translate language is unset.
const DEFAULT_TRANSLATE_NAME: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStyle {
    Default,
    None,
}

/// Language code used in preference keys: the parent group's language, or "all".
pub fn language_code_for(section: &Section) -> &str {
    match section.parent.as_deref().map(|p| &p.state) {
        Some(SectionState::SpecificLang(lang)) => lang.as_str(),
        _ => ALL_LANGUAGES,
    }
}

/// Preference a row's toggle controls.
pub fn toggle_purpose_for(section: &Section) -> UserInteractiveState {
    match section.state {
        SectionState::None(action) => action,
        _ => UserInteractiveState::None,
    }
}

fn thumb_tint(on: bool, palette: &Palette) -> Color32 {
    if on {
        palette.cta
    } else {
        palette.light_gray
    }
}

fn track_tint(palette: &Palette) -> Color32 {
    let c = palette.cta;
    Color32::from_rgba_unmultiplied(
        c.r(),
        c.g(),
        c.b(),
        (SWITCH_TRACK_ALPHA * 255.0).round() as u8,
    )
}

pub struct SettingsRowCell {
    prefs: Preferences,
    section: Option<Section>,
    selection_style: SelectionStyle,
    palette: Palette,
    widgets: Option<WidgetSet>,
}

impl SettingsRowCell {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            prefs,
            section: None,
            selection_style: SelectionStyle::Default,
            palette: Palette::default(),
            widgets: None,
        }
    }

    pub fn section(&self) -> Option<&Section> {
        self.section.as_ref()
    }

    pub fn selection_style(&self) -> SelectionStyle {
        self.selection_style
    }

    /// Widgets of the last bind; `None` until [`configure`](Self::configure) ran.
    pub fn widgets(&self) -> Option<&WidgetSet> {
        self.widgets.as_ref()
    }

    pub fn language_code(&self) -> String {
        self.section
            .as_ref()
            .map(language_code_for)
            .unwrap_or(ALL_LANGUAGES)
            .to_string()
    }

    pub fn toggle_purpose(&self) -> UserInteractiveState {
        self.section
            .as_ref()
            .map(toggle_purpose_for)
            .unwrap_or(UserInteractiveState::None)
    }

    /// Render `section` into a freshly chosen widget set.
    pub fn configure(&mut self, section: Section, env: &CellEnvironment) {
        self.selection_style = SelectionStyle::None;
        self.palette = env.palette;
        let mut w = WidgetSet::for_device(env.device);

        w.title.text = Some(section.title.clone());

        match &section.short_description {
            Some(text) => {
                w.description.text = Some(text.clone());
                w.description.attached = true;
            }
            None => {
                w.description.text = None;
                w.description.attached = false;
            }
        }

        let is_translate = section.state == SectionState::TranslateLang;
        let has_toggle = section.has_toggle;
        self.section = Some(section);

        if has_toggle {
            w.icon.hidden = true;
            w.toggle.hidden = false;
            self.widgets = Some(w);
            self.fetch_switch_state();
            if let Some(w) = self.widgets.as_mut() {
                w.toggle.on_tint = track_tint(&env.palette);
                w.toggle.thumb_tint = thumb_tint(w.toggle.is_on, &env.palette);
            }
        } else {
            w.icon.hidden = false;
            w.icon.icon = Some(if env.is_right_to_left() {
                Chevron::Left
            } else {
                Chevron::Right
            });
            w.icon.tint = Some(env.palette.menu_option);
            w.toggle.hidden = true;
            self.widgets = Some(w);
        }

        let subtitle = if is_translate {
            Some(self.translate_language_label(&env.locale))
        } else {
            None
        };
        if let Some(w) = self.widgets.as_mut() {
            match subtitle {
                Some(text) => {
                    w.subtitle.text = Some(text);
                    w.subtitle.color = Some(env.palette.menu_option);
                }
                None => w.subtitle.attached = false,
            }
        }
    }

    fn translate_language_label(&self, locale: &str) -> String {
        let lang = self.language_code();
        let abbr = self.prefs.translate_language(&lang);
        // A display name ("german") is accepted in place of the abbreviation
        let known = languages::name_for_abbreviation(&abbr).or_else(|| {
            languages::abbreviation_for(&abbr).and_then(languages::name_for_abbreviation)
        });
        let name = match known {
            Some(name) => name.to_string(),
            None if abbr.is_empty() => DEFAULT_TRANSLATE_NAME.to_string(),
            None => {
                tracing::warn!("unknown translate language {:?} for {}", abbr, lang);
                abbr
            }
        };
        i18n::localized_in(locale, &i18n::language_name_key(&name), &name)
    }

    /// Pull the toggle state for this row's purpose from the store.
    pub fn fetch_switch_state(&mut self) {
        let Some(pref) = BoolPreference::for_purpose(self.toggle_purpose()) else {
            return;
        };
        let on = self.prefs.toggle(&self.language_code(), pref);
        if let Some(w) = self.widgets.as_mut() {
            w.toggle.is_on = on;
        }
    }

    /// The switch was flipped to `is_on` by the user.
    pub fn on_toggle_changed(&mut self, is_on: bool) {
        let Some(w) = self.widgets.as_mut() else {
            tracing::debug!("toggle changed on an unbound row");
            return;
        };
        w.toggle.is_on = is_on;
        w.toggle.thumb_tint = thumb_tint(is_on, &self.palette);

        if let Some(pref) = BoolPreference::for_purpose(self.toggle_purpose()) {
            self.prefs.set_toggle(&self.language_code(), pref, is_on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::DeviceClass;
    use crate::prefs::{MemoryStore, PrefKey, PreferenceName, PreferenceStore};
    use std::sync::Arc;

    fn env(locale: &str) -> CellEnvironment {
        CellEnvironment::new(DeviceClass::Phone, locale, Palette::light())
    }

    fn german() -> Section {
        Section::new("German", SectionState::SpecificLang("de".into()))
    }

    fn setup() -> (Arc<MemoryStore>, SettingsRowCell) {
        let store = Arc::new(MemoryStore::new());
        let cell = SettingsRowCell::new(Preferences::new(store.clone()));
        (store, cell)
    }

    #[test]
    fn widgets_absent_before_configure() {
        let (_, cell) = setup();
        assert!(cell.widgets().is_none());
        assert_eq!(cell.selection_style(), SelectionStyle::Default);
    }

    #[test]
    fn layout_follows_device_on_every_configure() {
        let (_, mut cell) = setup();
        let section = Section::new("Keyboards", SectionState::AppLang);
        cell.configure(section.clone(), &env("en"));
        assert_eq!(cell.widgets().unwrap().layout, DeviceClass::Phone);
        let pad = CellEnvironment::new(DeviceClass::Pad, "en", Palette::light());
        cell.configure(section, &pad);
        assert_eq!(cell.widgets().unwrap().layout, DeviceClass::Pad);
        assert_eq!(cell.selection_style(), SelectionStyle::None);
    }

    #[test]
    fn plain_row_shows_chevron_by_locale_direction() {
        let (_, mut cell) = setup();
        let section = Section::new("German", SectionState::SpecificLang("de".into()));
        for (locale, expected) in [
            ("ar", Chevron::Left),
            ("ar-SA", Chevron::Left),
            ("en-US", Chevron::Right),
            ("de", Chevron::Right),
        ] {
            cell.configure(section.clone(), &env(locale));
            let w = cell.widgets().unwrap();
            assert!(w.toggle.hidden);
            assert!(!w.icon.hidden);
            assert_eq!(w.icon.icon, Some(expected), "locale {}", locale);
            assert_eq!(w.icon.tint, Some(Palette::light().menu_option));
        }
    }

    #[test]
    fn unset_toggles_show_defaults() {
        let (store, mut cell) = setup();
        for (action, expected) in [
            (UserInteractiveState::ToggleCommaAndPeriod, false),
            (UserInteractiveState::ToggleAccentCharacters, false),
            (UserInteractiveState::DoubleSpacePeriods, true),
            (UserInteractiveState::AutosuggestEmojis, true),
        ] {
            cell.configure(Section::toggle("t", action).with_parent(german()), &env("en"));
            let w = cell.widgets().unwrap();
            assert!(!w.toggle.hidden);
            assert!(w.icon.hidden);
            assert_eq!(w.toggle.is_on, expected, "{:?}", action);
        }
        // reading defaults writes nothing
        assert!(store.is_empty());
    }

    #[test]
    fn written_toggle_survives_rebind() {
        let (store, mut cell) = setup();
        let section =
            Section::toggle("Emoji", UserInteractiveState::AutosuggestEmojis).with_parent(german());
        cell.configure(section.clone(), &env("en"));
        cell.on_toggle_changed(false);
        let key = PrefKey::new("de", PreferenceName::EmojiAutosuggest);
        assert_eq!(store.get_bool(&key), Some(false));

        cell.on_toggle_changed(true);
        let mut fresh = SettingsRowCell::new(Preferences::new(store.clone()));
        fresh.configure(section, &env("en"));
        assert!(fresh.widgets().unwrap().toggle.is_on);
    }

    #[test]
    fn toggle_tints_follow_state() {
        let (_, mut cell) = setup();
        let palette = Palette::light();
        cell.configure(
            Section::toggle("Accents", UserInteractiveState::ToggleAccentCharacters),
            &env("en"),
        );
        let w = cell.widgets().unwrap();
        assert_eq!(w.toggle.thumb_tint, palette.light_gray);
        assert_eq!(w.toggle.on_tint.a(), 102);

        cell.on_toggle_changed(true);
        assert_eq!(cell.widgets().unwrap().toggle.thumb_tint, palette.cta);
    }

    #[test]
    fn toggle_without_purpose_writes_nothing() {
        let (store, mut cell) = setup();
        let mut section = Section::toggle("Odd", UserInteractiveState::None);
        section.parent = Some(Box::new(german()));
        cell.configure(section, &env("en"));
        cell.on_toggle_changed(true);
        assert!(store.is_empty());
        assert!(cell.widgets().unwrap().toggle.is_on);
    }

    #[test]
    fn repeated_writes_are_idempotent() {
        let (store, mut cell) = setup();
        cell.configure(
            Section::toggle("Comma", UserInteractiveState::ToggleCommaAndPeriod),
            &env("en"),
        );
        cell.on_toggle_changed(true);
        cell.on_toggle_changed(true);
        assert_eq!(store.len(), 1);
        let key = PrefKey::new("all", PreferenceName::CommaAndPeriod);
        assert_eq!(store.get_bool(&key), Some(true));
    }

    #[test]
    fn language_code_comes_from_parent() {
        let row = Section::toggle("x", UserInteractiveState::DoubleSpacePeriods);
        assert_eq!(language_code_for(&row), "all");
        assert_eq!(language_code_for(&row.clone().with_parent(german())), "de");
        let app = Section::new("App", SectionState::AppLang);
        assert_eq!(language_code_for(&row.with_parent(app)), "all");

        let (_, cell) = setup();
        assert_eq!(cell.language_code(), "all");
        assert_eq!(cell.toggle_purpose(), UserInteractiveState::None);
    }

    #[test]
    fn toggle_purpose_only_from_none_state() {
        let row = Section::toggle("x", UserInteractiveState::AutosuggestEmojis);
        assert_eq!(toggle_purpose_for(&row), UserInteractiveState::AutosuggestEmojis);
        assert_eq!(toggle_purpose_for(&german()), UserInteractiveState::None);
    }

    // Reading the translate language is a documented write: the default "en"
    // is stored so the keyboard extension agrees with what the row shows.
    #[test]
    fn translate_row_stores_default_and_shows_english() {
        let (store, mut cell) = setup();
        let section = Section::new("Translate", SectionState::TranslateLang).with_parent(german());
        cell.configure(section, &env("en"));
        let key = PrefKey::new("de", PreferenceName::TranslateLanguage);
        assert_eq!(store.get_string(&key).as_deref(), Some("en"));
        let w = cell.widgets().unwrap();
        assert!(w.subtitle.attached);
        assert_eq!(w.subtitle.text.as_deref(), Some("English"));
        assert_eq!(w.subtitle.color, Some(Palette::light().menu_option));
    }

    #[test]
    fn translate_row_localizes_chosen_language() {
        let (_, mut cell) = setup();
        cell.prefs.set_translate_language("de", "fr");
        let section = Section::new("Translate", SectionState::TranslateLang).with_parent(german());
        cell.configure(section.clone(), &env("de-DE"));
        assert_eq!(
            cell.widgets().unwrap().subtitle.text.as_deref(),
            Some("Französisch")
        );
        cell.configure(section, &env("en"));
        assert_eq!(cell.widgets().unwrap().subtitle.text.as_deref(), Some("French"));
    }

    #[test]
    fn unknown_translate_abbreviation_is_shown_verbatim() {
        let (store, mut cell) = setup();
        store.set_string(&PrefKey::new("all", PreferenceName::TranslateLanguage), "xx");
        cell.configure(Section::new("Translate", SectionState::TranslateLang), &env("en"));
        assert_eq!(cell.widgets().unwrap().subtitle.text.as_deref(), Some("xx"));
    }

    #[test]
    fn translate_language_stored_as_name_is_resolved() {
        let (store, mut cell) = setup();
        store.set_string(&PrefKey::new("de", PreferenceName::TranslateLanguage), "german");
        let section = Section::new("Translate", SectionState::TranslateLang).with_parent(german());
        cell.configure(section, &env("en"));
        assert_eq!(cell.widgets().unwrap().subtitle.text.as_deref(), Some("German"));
    }

    #[test]
    fn other_rows_detach_subtitle() {
        let (_, mut cell) = setup();
        cell.configure(german(), &env("en"));
        let w = cell.widgets().unwrap();
        assert!(!w.subtitle.attached);
        assert!(!w.subtitle.is_visible());
    }

    #[test]
    fn description_attached_only_when_present() {
        let (_, mut cell) = setup();
        let with = Section::toggle("Emoji", UserInteractiveState::AutosuggestEmojis)
            .with_description("Suggest emojis while typing.");
        cell.configure(with.clone(), &env("en"));
        let d = &cell.widgets().unwrap().description;
        assert!(d.attached);
        assert_eq!(d.text.as_deref(), Some("Suggest emojis while typing."));

        let mut without = with;
        without.short_description = None;
        cell.configure(without, &env("en"));
        let d = &cell.widgets().unwrap().description;
        assert!(!d.attached);
        assert_eq!(d.text, None);
    }

    #[test]
    fn title_is_copied() {
        let (_, mut cell) = setup();
        cell.configure(german(), &env("en"));
        assert_eq!(
            cell.widgets().unwrap().title.text.as_deref(),
            Some("German")
        );
    }
}
