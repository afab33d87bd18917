//! Typed access to the shared keyboard preference container.
//!
//! Keys are `<languageCode><PreferenceName>` strings so the keyboard extension
//! can read them without this crate; everything above the store speaks in
//! `(language code, preference)` pairs and takes defaults from [`keys`].

pub mod keys;
pub mod store;

use std::sync::Arc;

pub use keys::{
    BoolPreference, PrefKey, PreferenceName, ALL_LANGUAGES, DEFAULT_TRANSLATE_LANGUAGE,
};
pub use store::{FileStore, MemoryStore, PrefValue, PreferenceStore};

/// Cloneable handle injected into every settings row.
#[derive(Clone)]
pub struct Preferences {
    store: Arc<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Convenience for tests and previews.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Stored value, or the table default when the key is absent.
    pub fn toggle(&self, lang: &str, pref: BoolPreference) -> bool {
        self.store
            .get_bool(&PrefKey::new(lang, pref.name()))
            .unwrap_or(pref.default_value())
    }

    pub fn set_toggle(&self, lang: &str, pref: BoolPreference, on: bool) {
        let key = PrefKey::new(lang, pref.name());
        tracing::debug!("set {} = {}", key, on);
        self.store.set_bool(&key, on);
    }

    /// Abbreviation of the language translated from.
    ///
    /// Reading an unset value stores [`DEFAULT_TRANSLATE_LANGUAGE`] so the keyboard
    /// extension sees the same choice the settings screen shows.
    pub fn translate_language(&self, lang: &str) -> String {
        let key = PrefKey::new(lang, PreferenceName::TranslateLanguage);
        match self.store.get_string(&key) {
            Some(abbr) => abbr,
            None => {
                tracing::debug!("{} unset, storing {}", key, DEFAULT_TRANSLATE_LANGUAGE);
                self.store.set_string(&key, DEFAULT_TRANSLATE_LANGUAGE);
                DEFAULT_TRANSLATE_LANGUAGE.to_string()
            }
        }
    }

    pub fn set_translate_language(&self, lang: &str, abbr: &str) {
        let key = PrefKey::new(lang, PreferenceName::TranslateLanguage);
        tracing::debug!("set {} = {}", key, abbr);
        self.store.set_string(&key, abbr);
    }

    /// Re-read values the keyboard extension may have written.
    pub fn reload(&self) {
        if let Err(e) = self.store.reload() {
            tracing::warn!("failed to reload preferences: {}", e);
        }
    }
}
