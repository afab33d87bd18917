use fluent_bundle::{FluentBundle, FluentResource};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::sync::RwLock;
use unic_langid::LanguageIdentifier;

/// Prefix of the keys that name languages, e.g. `app._global.english`.
pub const GLOBAL_KEY_PREFIX: &str = "app._global.";

// Normalize locale strings like "de_DE.UTF-8" or "de-DE" to BCP47-ish form
// Example: "de_DE.UTF-8" -> "de-DE"
fn normalize_locale_tag<S: AsRef<str>>(s: S) -> String {
    let mut tag = s.as_ref().trim().to_string();
    if let Some((lang_region, _encoding)) = tag.split_once('.') {
        tag = lang_region.to_string();
    }
    tag = tag.replace('_', "-");
    tag
}

fn english() -> LanguageIdentifier {
    "en-US".parse().unwrap_or_default()
}

fn parse_tag(raw: &str) -> Option<LanguageIdentifier> {
    normalize_locale_tag(raw).parse::<LanguageIdentifier>().ok()
}

fn detect_lang() -> LanguageIdentifier {
    // 1) Explicit override via env var
    if let Ok(s) = std::env::var("SCRIBE_UI_LANG") {
        let s = s.trim();
        if !s.is_empty() && s != "auto" {
            if let Some(li) = parse_tag(s) {
                return li;
            }
        }
    }

    // 2) OS/UI locale via sys-locale
    if let Some(li) = sys_locale::get_locale().and_then(|loc| parse_tag(&loc)) {
        return li;
    }

    // 3) Common UNIX envs as a last resort
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"].iter() {
        if let Some(li) = std::env::var(key).ok().and_then(|v| parse_tag(&v)) {
            return li;
        }
    }

    english()
}

fn resolve_lang(pref: Option<&str>) -> LanguageIdentifier {
    match pref.map(|s| s.trim().to_lowercase()) {
        Some(ref p) if p.is_empty() || p == "auto" => detect_lang(),
        Some(p) => parse_tag(&p).unwrap_or_else(detect_lang),
        None => detect_lang(),
    }
}

fn ftl_source(lang: &LanguageIdentifier) -> &'static str {
    match lang.language.as_str() {
        "de" => include_str!("../i18n/de/app.ftl"),
        "ar" => include_str!("../i18n/ar/app.ftl"),
        _ => include_str!("../i18n/en/app.ftl"),
    }
}

fn build_bundle(lang: LanguageIdentifier) -> FluentBundle<FluentResource> {
    let mut bundle = FluentBundle::new(vec![lang.clone()]);
    let resource = match FluentResource::try_new(ftl_source(&lang).to_owned()) {
        Ok(res) => res,
        Err((_, errors)) => {
            tracing::warn!(
                "failed to parse FTL for {}: {:?}. Falling back to English.",
                lang,
                errors
            );
            if lang.language != "en" {
                return build_bundle(english());
            }
            return bundle;
        }
    };

    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!("failed to add FTL resource for {}: {:?}", lang, errors);
        if lang.language != "en" {
            return build_bundle(english());
        }
    }

    bundle
}

/// Fluent ids cannot contain dots: `app._global.english` -> `app-_global-english`.
fn fluent_id(key: &str) -> String {
    key.replace('.', "-")
}

fn lookup(bundle: &FluentBundle<FluentResource>, id: &str) -> Option<String> {
    let msg = bundle.get_message(id)?;
    let pattern = msg.value()?;
    let mut errors = vec![];
    let value: Cow<str> = bundle.format_pattern(pattern, None, &mut errors);
    Some(value.into_owned())
}

static LANG_PREF: Lazy<RwLock<String>> = Lazy::new(|| RwLock::new(String::from("auto")));

fn current_pref() -> String {
    LANG_PREF
        .read()
        .map(|g| g.clone())
        .unwrap_or_else(|_| String::from("auto"))
}

// Store UI language preference (auto/en/de/ar); bundles are rebuilt per lookup
pub fn set_ui_language_preference(pref: &str) {
    if let Ok(mut g) = LANG_PREF.write() {
        *g = pref.to_string();
    }
}

/// Resolved interface locale, e.g. "ar-EG".
pub fn ui_locale() -> String {
    resolve_lang(Some(&current_pref())).to_string()
}

pub fn tr(id: &str) -> String {
    let bundle = build_bundle(resolve_lang(Some(&current_pref())));
    lookup(&bundle, id).unwrap_or_else(|| id.to_string())
}

/// Resolve a dotted key such as `app._global.german`, returning `fallback`
/// when no bundle defines it.
pub fn localized(key: &str, fallback: &str) -> String {
    localized_in(&ui_locale(), key, fallback)
}

pub fn localized_in(locale: &str, key: &str, fallback: &str) -> String {
    let bundle = build_bundle(resolve_lang(Some(locale)));
    lookup(&bundle, &fluent_id(key)).unwrap_or_else(|| fallback.to_string())
}

/// `app._global.<lowercased name>` for a language display name.
pub fn language_name_key(name: &str) -> String {
    format!("{}{}", GLOBAL_KEY_PREFIX, name.to_lowercase())
}
