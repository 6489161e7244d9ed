//! Translation map and lookup utilities.

use std::collections::HashMap;

use super::language::LanguageCode;

/// Translation map: dot-notation key -> translated string.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a translation in the translation map.
///
/// Inputs:
/// - `key`: Dot-notation key (e.g., "app.title")
/// - `translations`: Translation map to search
///
/// Output:
/// - `Option<String>` containing translation or None if not found
#[must_use]
pub fn translate(key: &str, translations: &TranslationMap) -> Option<String> {
    translations.get(key).cloned()
}

/// What: Look up translation with fallback to English.
///
/// Inputs:
/// - `key`: Dot-notation key
/// - `translations`: Primary translation map
/// - `fallback_translations`: Fallback translation map (English)
///
/// Output:
/// - Translated string (from primary or fallback, or key itself if both missing)
///
/// Details:
/// - Empty strings count as missing so the UI never renders blank labels
/// - Returns key itself if neither has a translation (for debugging)
pub fn translate_with_fallback(
    key: &str,
    translations: &TranslationMap,
    fallback_translations: &TranslationMap,
) -> String {
    if let Some(translation) = translations.get(key).filter(|s| !s.is_empty()) {
        return translation.clone();
    }

    if let Some(translation) = fallback_translations.get(key).filter(|s| !s.is_empty()) {
        tracing::debug!(
            "Translation key '{}' not found in primary locale, using fallback",
            key
        );
        return translation.clone();
    }

    tracing::debug!(
        "Missing translation key: '{}'. Returning key as-is. Please add this key to locale files.",
        key
    );
    key.to_string()
}

/// Per-language dictionaries for every supported [`LanguageCode`].
///
/// Built once at startup by [`crate::i18n::load_table`] and owned by the
/// application state. Lookups never fail: see [`TranslationTable::resolve`].
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    /// Dictionary per language; a language without an entry behaves as empty.
    maps: HashMap<LanguageCode, TranslationMap>,
}

impl TranslationTable {
    /// What: Build a table from already-flattened dictionaries.
    ///
    /// Inputs:
    /// - `maps`: Iterator of `(language, dictionary)` pairs; later pairs replace earlier ones.
    #[must_use]
    pub fn from_maps(maps: impl IntoIterator<Item = (LanguageCode, TranslationMap)>) -> Self {
        Self {
            maps: maps.into_iter().collect(),
        }
    }

    /// What: Resolve `key` for `language` through the fallback chain.
    ///
    /// Inputs:
    /// - `key`: Dot-notation key
    /// - `language`: Active language
    ///
    /// Output:
    /// - The language's string, else the English string, else `key` verbatim
    #[must_use]
    pub fn resolve(&self, key: &str, language: LanguageCode) -> String {
        let empty = TranslationMap::new();
        let primary = self.maps.get(&language).unwrap_or(&empty);
        let fallback = self.maps.get(&LanguageCode::DEFAULT).unwrap_or(&empty);
        translate_with_fallback(key, primary, fallback)
    }

    /// Dictionary for one language, if loaded.
    #[must_use]
    pub fn map(&self, language: LanguageCode) -> Option<&TranslationMap> {
        self.maps.get(&language)
    }

    /// What: Replace the dictionary of one language.
    ///
    /// Inputs:
    /// - `language`: Language to replace
    /// - `map`: New dictionary
    pub fn insert(&mut self, language: LanguageCode, map: TranslationMap) {
        self.maps.insert(language, map);
    }

    /// Keys defined for the fallback language, sorted for stable iteration.
    #[must_use]
    pub fn default_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .maps
            .get(&LanguageCode::DEFAULT)
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}
