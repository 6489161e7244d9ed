//! Supported UI languages.

use std::fmt;
use std::str::FromStr;

/// Error returned when a language code is not one of the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code '{0}' (expected one of: en, hi, ta, te, kn)")]
pub struct UnknownLanguage(pub String);

/// Closed set of languages the interface can be displayed in.
///
/// English is the default and the fallback for every missing translation key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageCode {
    /// English (`en`).
    #[default]
    En,
    /// Hindi (`hi`).
    Hi,
    /// Tamil (`ta`).
    Ta,
    /// Telugu (`te`).
    Te,
    /// Kannada (`kn`).
    Kn,
}

impl LanguageCode {
    /// All supported languages in selector order.
    pub const ALL: [Self; 5] = [Self::En, Self::Hi, Self::Ta, Self::Te, Self::Kn];

    /// Language every lookup falls back to.
    pub const DEFAULT: Self = Self::En;

    /// Two-letter code used for locale files and configuration.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Kn => "kn",
        }
    }

    /// English display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Ta => "Tamil",
            Self::Te => "Telugu",
            Self::Kn => "Kannada",
        }
    }

    /// Name of the language written in its own script.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी",
            Self::Ta => "தமிழ்",
            Self::Te => "తెలుగు",
            Self::Kn => "ಕನ್ನಡ",
        }
    }

    /// BCP-47 tag handed to speech capabilities (Indian regional variants).
    #[must_use]
    pub const fn speech_locale(self) -> &'static str {
        match self {
            Self::En => "en-IN",
            Self::Hi => "hi-IN",
            Self::Ta => "ta-IN",
            Self::Te => "te-IN",
            Self::Kn => "kn-IN",
        }
    }

    /// What: Return the language after `self` in selector order, wrapping around.
    ///
    /// Output:
    /// - Next `LanguageCode`; `Kn` wraps to `En`.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    /// Accepts bare codes (`hi`), region-tagged codes (`hi-IN`), POSIX locale
    /// strings (`hi_IN.UTF-8`) and English names (`Hindi`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let primary = trimmed
            .split(['.', '@'])
            .next()
            .unwrap_or("")
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|l| l.code() == primary || l.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLanguage(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_locales_and_names() {
        assert_eq!("hi".parse::<LanguageCode>(), Ok(LanguageCode::Hi));
        assert_eq!("TA".parse::<LanguageCode>(), Ok(LanguageCode::Ta));
        assert_eq!("te_IN.UTF-8".parse::<LanguageCode>(), Ok(LanguageCode::Te));
        assert_eq!("kn-IN".parse::<LanguageCode>(), Ok(LanguageCode::Kn));
        assert_eq!("English".parse::<LanguageCode>(), Ok(LanguageCode::En));
        assert!("de".parse::<LanguageCode>().is_err());
        assert!("".parse::<LanguageCode>().is_err());
    }

    #[test]
    fn next_cycles_through_all_languages() {
        let mut lang = LanguageCode::En;
        let mut seen = Vec::new();
        for _ in 0..LanguageCode::ALL.len() {
            seen.push(lang);
            lang = lang.next();
        }
        assert_eq!(seen, LanguageCode::ALL.to_vec());
        assert_eq!(lang, LanguageCode::En);
    }
}
