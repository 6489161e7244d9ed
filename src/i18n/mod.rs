//! Internationalization (i18n) module for Suraksha.
//!
//! This module provides the supported language set, locale loading, startup
//! language resolution, and translation lookup.
//!
//! # Overview
//!
//! - **Languages**: English, Hindi, Tamil, Telugu and Kannada ([`LanguageCode`])
//! - **Locale files**: `locales/{code}.yml`, compiled into the binary; users may
//!   drop replacements into `~/.config/suraksha/locales/`
//! - **Fallback chain**: active language -> English -> the key itself
//! - **Lookup helpers**: `t()`, `t_fmt()`, and `t_fmt1()`
//!
//! Each locale file holds a nested YAML structure that is flattened into
//! dot-notation keys:
//!
//! ```yaml
//! hi:
//!   app:
//!     title: "सुरक्षा सहायक AI 🇮🇳"
//! ```
//!
//! This becomes accessible as `app.title`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use suraksha::i18n;
//! use suraksha::state::AppState;
//!
//! # let app = AppState::default();
//! let title = i18n::t(&app, "app.title");
//! let call = i18n::t_fmt1(&app, "contacts.call", "112");
//! ```
//!
//! # Error Handling
//!
//! - Missing keys fall back to English, then to the key itself (logged at debug level)
//! - Broken override files are logged and the embedded locale is kept
//! - Nothing in this module can abort the application

mod detection;
mod language;
mod loader;
pub mod translations;

pub use detection::detect_system_language;
pub use language::{LanguageCode, UnknownLanguage};
pub use loader::{LocaleError, embedded_source, load_locale_file, load_table, parse_locale_yaml};
pub use translations::{TranslationMap, TranslationTable, translate, translate_with_fallback};

/// What: Pick the language the session starts in.
///
/// Inputs:
/// - `cli`: Value of `--language`, if given
/// - `settings`: Value of `language` in `settings.conf` (empty means unset)
///
/// Output:
/// - First valid language from CLI, settings, system locale; `en` otherwise
///
/// Details:
/// - Invalid explicit values are logged and skipped rather than rejected
#[must_use]
pub fn resolve_startup_language(cli: Option<&str>, settings: &str) -> LanguageCode {
    let explicit = [("cli", cli.unwrap_or("")), ("settings", settings)];
    for (source, raw) in explicit {
        if raw.trim().is_empty() {
            continue;
        }
        match raw.parse::<LanguageCode>() {
            Ok(lang) => {
                tracing::debug!(source, language = %lang, "startup language chosen");
                return lang;
            }
            Err(e) => tracing::warn!(source, error = %e, "ignoring language setting"),
        }
    }
    detect_system_language().unwrap_or_else(|| {
        tracing::debug!("System locale not supported, using default language");
        LanguageCode::DEFAULT
    })
}

/// What: Get a translation for a given key in the active language.
///
/// Inputs:
/// - `app`: `AppState` holding the translation table and active language
/// - `key`: Dot-notation key (e.g., "dashboard.quick.fire.title")
///
/// Output:
/// - Translated string, or the key itself if no language has it
pub fn t(app: &crate::state::AppState, key: &str) -> String {
    app.translations.resolve(key, app.language)
}

/// What: Get a translation with format arguments.
///
/// Inputs:
/// - `app`: `AppState` holding the translation table and active language
/// - `key`: Dot-notation key
/// - `args`: Format arguments (as Display trait objects)
///
/// Output:
/// - Formatted translated string
///
/// Details:
/// - Replaces placeholders in order: first {} gets first arg, etc.
pub fn t_fmt(app: &crate::state::AppState, key: &str, args: &[&dyn std::fmt::Display]) -> String {
    let mut result = t(app, key);
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

/// What: Get a translation with a single format argument (convenience function).
///
/// Inputs:
/// - `app`: `AppState` holding the translation table and active language
/// - `key`: Dot-notation key
/// - `arg`: Single format argument
///
/// Output:
/// - Formatted translated string
pub fn t_fmt1<T: std::fmt::Display>(app: &crate::state::AppState, key: &str, arg: T) -> String {
    t_fmt(app, key, &[&arg])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_sources_take_priority_in_order() {
        assert_eq!(resolve_startup_language(Some("ta"), "hi"), LanguageCode::Ta);
        assert_eq!(resolve_startup_language(None, "hi"), LanguageCode::Hi);
        assert_eq!(
            resolve_startup_language(Some("xx"), "kn_IN.UTF-8"),
            LanguageCode::Kn
        );
    }

    #[test]
    fn every_default_key_resolves_non_empty_in_every_language() {
        let table = load_table(None);
        let keys = table.default_keys();
        assert!(!keys.is_empty());
        for language in LanguageCode::ALL {
            for key in &keys {
                let value = table.resolve(key, language);
                assert!(!value.is_empty(), "{key} empty for {language}");
            }
        }
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let table = load_table(None);
        for language in LanguageCode::ALL {
            assert_eq!(
                table.resolve("no.such.key", language),
                "no.such.key".to_string()
            );
        }
    }

    #[test]
    fn format_helpers_substitute_in_order() {
        let app = crate::state::AppState::default();
        assert_eq!(t_fmt1(&app, "contacts.call", "102"), "Call 102");
        assert_eq!(
            t_fmt(&app, "assistant.placeholder", &[&"English"]),
            "Type your message in English..."
        );
    }
}
