use std::fmt;

use crate::section::UserInteractiveState;

/// Language code used when a row is not scoped to one keyboard language.
pub const ALL_LANGUAGES: &str = "all";

/// Stored when `<lang>TranslateLanguage` is read before anything was chosen.
pub const DEFAULT_TRANSLATE_LANGUAGE: &str = "en";

/// Named preference; its suffix is appended to the language code to form the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceName {
    CommaAndPeriod,
    AccentCharacters,
    DoubleSpacePeriods,
    EmojiAutosuggest,
    TranslateLanguage,
}

impl PreferenceName {
    pub fn key_suffix(self) -> &'static str {
        match self {
            PreferenceName::CommaAndPeriod => "CommaAndPeriod",
            PreferenceName::AccentCharacters => "AccentCharacters",
            PreferenceName::DoubleSpacePeriods => "DoubleSpacePeriods",
            PreferenceName::EmojiAutosuggest => "EmojiAutosuggest",
            PreferenceName::TranslateLanguage => "TranslateLanguage",
        }
    }
}

/// Boolean preferences a toggle row can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolPreference {
    CommaAndPeriod,
    AccentCharacters,
    DoubleSpacePeriods,
    EmojiAutosuggest,
}

impl BoolPreference {
    pub const ALL: [BoolPreference; 4] = [
        BoolPreference::CommaAndPeriod,
        BoolPreference::AccentCharacters,
        BoolPreference::DoubleSpacePeriods,
        BoolPreference::EmojiAutosuggest,
    ];

    /// Value assumed when the key is absent from the store.
    pub const fn default_value(self) -> bool {
        match self {
            BoolPreference::CommaAndPeriod => false,
            BoolPreference::AccentCharacters => false,
            BoolPreference::DoubleSpacePeriods => true,
            BoolPreference::EmojiAutosuggest => true,
        }
    }

    pub const fn name(self) -> PreferenceName {
        match self {
            BoolPreference::CommaAndPeriod => PreferenceName::CommaAndPeriod,
            BoolPreference::AccentCharacters => PreferenceName::AccentCharacters,
            BoolPreference::DoubleSpacePeriods => PreferenceName::DoubleSpacePeriods,
            BoolPreference::EmojiAutosuggest => PreferenceName::EmojiAutosuggest,
        }
    }

    /// Preference controlled by a toggle purpose; `None` has no binding.
    pub fn for_purpose(purpose: UserInteractiveState) -> Option<Self> {
        match purpose {
            UserInteractiveState::ToggleCommaAndPeriod => Some(BoolPreference::CommaAndPeriod),
            UserInteractiveState::ToggleAccentCharacters => Some(BoolPreference::AccentCharacters),
            UserInteractiveState::DoubleSpacePeriods => Some(BoolPreference::DoubleSpacePeriods),
            UserInteractiveState::AutosuggestEmojis => Some(BoolPreference::EmojiAutosuggest),
            UserInteractiveState::None => None,
        }
    }
}

/// Store key `<languageCode><PreferenceName>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefKey {
    lang: String,
    name: PreferenceName,
}

impl PrefKey {
    pub fn new(lang: impl Into<String>, name: PreferenceName) -> Self {
        Self {
            lang: lang.into(),
            name,
        }
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.lang, self.name.key_suffix())
    }
}
