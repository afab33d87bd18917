//! Section tree shown by the settings screen.

use crate::i18n;
use crate::languages::LANGUAGES_ABBR;
use crate::section::{Section, SectionState, UserInteractiveState};

/// Headed group of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup {
    pub heading: String,
    pub rows: Vec<Section>,
}

fn functionality_rows(parent: &Section) -> Vec<Section> {
    vec![
        Section::toggle(
            i18n::tr("row-double-space"),
            UserInteractiveState::DoubleSpacePeriods,
        )
        .with_description(i18n::tr("row-double-space-desc"))
        .with_parent(parent.clone()),
        Section::toggle(
            i18n::tr("row-emoji-suggest"),
            UserInteractiveState::AutosuggestEmojis,
        )
        .with_description(i18n::tr("row-emoji-suggest-desc"))
        .with_parent(parent.clone()),
    ]
}

/// Top level: one row per keyboard plus app-wide ("all") toggles.
pub fn root_groups() -> Vec<SectionGroup> {
    let app = Section::new(i18n::tr("app-title"), SectionState::AppLang);
    let keyboards = LANGUAGES_ABBR
        .iter()
        .map(|(name, abbr)| {
            Section::new(
                i18n::localized(&i18n::language_name_key(name), name),
                SectionState::SpecificLang(abbr.to_string()),
            )
        })
        .collect();
    vec![
        SectionGroup {
            heading: i18n::tr("group-keyboards"),
            rows: keyboards,
        },
        SectionGroup {
            heading: i18n::tr("group-functionality"),
            rows: functionality_rows(&app),
        },
    ]
}

/// Rows scoped to one keyboard language.
pub fn language_groups(group: &Section) -> Vec<SectionGroup> {
    vec![
        SectionGroup {
            heading: i18n::tr("group-layout"),
            rows: vec![
                Section::toggle(
                    i18n::tr("row-comma-period"),
                    UserInteractiveState::ToggleCommaAndPeriod,
                )
                .with_description(i18n::tr("row-comma-period-desc"))
                .with_parent(group.clone()),
                Section::toggle(
                    i18n::tr("row-accent-characters"),
                    UserInteractiveState::ToggleAccentCharacters,
                )
                .with_description(i18n::tr("row-accent-characters-desc"))
                .with_parent(group.clone()),
            ],
        },
        SectionGroup {
            heading: i18n::tr("group-translation"),
            rows: vec![Section::new(
                i18n::tr("row-translate-lang"),
                SectionState::TranslateLang,
            )
            .with_parent(group.clone())],
        },
        SectionGroup {
            heading: i18n::tr("group-functionality"),
            rows: functionality_rows(group),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{language_code_for, toggle_purpose_for};

    #[test]
    fn root_lists_every_keyboard() {
        let groups = root_groups();
        let keyboards = &groups[0].rows;
        assert_eq!(keyboards.len(), LANGUAGES_ABBR.len());
        assert!(keyboards.iter().all(|s| !s.has_toggle));
        assert!(keyboards
            .iter()
            .any(|s| s.state == SectionState::SpecificLang("de".into())));
    }

    #[test]
    fn root_toggles_use_all_scope() {
        for row in &root_groups()[1].rows {
            assert!(row.has_toggle);
            assert_eq!(language_code_for(row), "all");
        }
    }

    #[test]
    fn language_rows_scope_to_group() {
        let group = Section::new("Swedish", SectionState::SpecificLang("sv".into()));
        let groups = language_groups(&group);
        let rows: Vec<&Section> = groups.iter().flat_map(|g| g.rows.iter()).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|s| language_code_for(s) == "sv"));
        let purposes: Vec<UserInteractiveState> =
            rows.iter().map(|s| toggle_purpose_for(s)).collect();
        assert!(purposes.contains(&UserInteractiveState::ToggleCommaAndPeriod));
        assert!(purposes.contains(&UserInteractiveState::AutosuggestEmojis));
        assert!(rows.iter().any(|s| s.state == SectionState::TranslateLang));
    }
}
