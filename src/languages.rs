/// Keyboard languages: (display name, abbreviation).
pub const LANGUAGES_ABBR: &[(&str, &str)] = &[
    ("English", "en"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Spanish", "es"),
    ("Swedish", "sv"),
];

/// Display name -> abbreviation ("German" -> "de").
pub fn abbreviation_for(name: &str) -> Option<&'static str> {
    LANGUAGES_ABBR
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, a)| *a)
}

/// Reverse lookup by value: abbreviation -> display name ("de" -> "German").
pub fn name_for_abbreviation(abbr: &str) -> Option<&'static str> {
    let abbr = abbr.trim();
    LANGUAGES_ABBR
        .iter()
        .find(|(_, a)| a.eq_ignore_ascii_case(abbr))
        .map(|(n, _)| *n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_both_directions() {
        assert_eq!(name_for_abbreviation("de"), Some("German"));
        assert_eq!(abbreviation_for("german"), Some("de"));
        assert_eq!(name_for_abbreviation("xx"), None);
    }

    #[test]
    fn abbreviations_are_unique() {
        for (i, (_, a)) in LANGUAGES_ABBR.iter().enumerate() {
            assert!(LANGUAGES_ABBR[i + 1..].iter().all(|(_, b)| b != a));
        }
    }
}
