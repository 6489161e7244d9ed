//! System locale detection utilities.

use std::env;

use super::language::LanguageCode;

/// What: Detect the interface language from locale environment variables.
///
/// Inputs:
/// - None (reads from environment)
///
/// Output:
/// - `Some(LanguageCode)` for the first variable naming a supported language, else `None`
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in that order
/// - `C`/`POSIX` and unsupported languages are skipped
pub fn detect_system_language() -> Option<LanguageCode> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var_name| env::var(var_name).ok())
        .find_map(|value| parse_locale_string(&value))
}

/// What: Parse a POSIX locale string like `hi_IN.UTF-8` into a supported language.
///
/// Inputs:
/// - `locale_str`: Raw value of a locale environment variable
///
/// Output:
/// - `Some(LanguageCode)` when the language part is supported
fn parse_locale_string(locale_str: &str) -> Option<LanguageCode> {
    let trimmed = locale_str.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("C") || trimmed == "POSIX" {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_locale_string() {
        assert_eq!(parse_locale_string("hi_IN.UTF-8"), Some(LanguageCode::Hi));
        assert_eq!(parse_locale_string("ta_IN"), Some(LanguageCode::Ta));
        assert_eq!(parse_locale_string("en_US.utf8"), Some(LanguageCode::En));
        assert_eq!(parse_locale_string("kn"), Some(LanguageCode::Kn));
        assert_eq!(parse_locale_string("de_DE.UTF-8"), None);
        assert_eq!(parse_locale_string("C"), None);
        assert_eq!(parse_locale_string("POSIX"), None);
        assert_eq!(parse_locale_string(""), None);
    }

    #[test]
    fn test_detect_system_language_with_env() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let original_lang = env::var("LANG").ok();
        let original_lc_all = env::var("LC_ALL").ok();
        let original_lc_messages = env::var("LC_MESSAGES").ok();

        unsafe {
            env::set_var("LANG", "te_IN.UTF-8");
            env::remove_var("LC_ALL");
            env::remove_var("LC_MESSAGES");
        }
        assert_eq!(detect_system_language(), Some(LanguageCode::Te));

        unsafe {
            env::set_var("LC_ALL", "de_DE.UTF-8");
        }
        // Unsupported LC_ALL is skipped rather than masking LANG.
        assert_eq!(detect_system_language(), Some(LanguageCode::Te));

        unsafe {
            match original_lang {
                Some(v) => env::set_var("LANG", v),
                None => env::remove_var("LANG"),
            }
            match original_lc_all {
                Some(v) => env::set_var("LC_ALL", v),
                None => env::remove_var("LC_ALL"),
            }
            match original_lc_messages {
                Some(v) => env::set_var("LC_MESSAGES", v),
                None => env::remove_var("LC_MESSAGES"),
            }
        }
    }
}
