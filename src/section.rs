/// Which boolean keyboard preference a toggle row controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserInteractiveState {
    ToggleCommaAndPeriod,
    ToggleAccentCharacters,
    DoubleSpacePeriods,
    AutosuggestEmojis,
    None,
}

/// Semantic purpose of a settings row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionState {
    /// App interface language row
    AppLang,
    /// Group scoped to one keyboard language (abbreviation, e.g. "de")
    SpecificLang(String),
    /// "Translate from" language selector
    TranslateLang,
    ExternalLink,
    /// Plain row; a toggle row carries the preference it controls
    None(UserInteractiveState),
}

/// Descriptor for one row of the settings list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub short_description: Option<String>,
    pub has_toggle: bool,
    pub state: SectionState,
    /// Group this row belongs to; supplies the language code for preference keys.
    pub parent: Option<Box<Section>>,
}

impl Section {
    pub fn new(title: impl Into<String>, state: SectionState) -> Self {
        Self {
            title: title.into(),
            short_description: None,
            has_toggle: false,
            state,
            parent: None,
        }
    }

    /// Toggle row bound to `action`.
    pub fn toggle(title: impl Into<String>, action: UserInteractiveState) -> Self {
        Self {
            has_toggle: true,
            ..Self::new(title, SectionState::None(action))
        }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    pub fn with_parent(mut self, parent: Section) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}
