//! Locale file loading and parsing.

use std::fs;
use std::path::Path;

use super::language::LanguageCode;
use super::translations::{TranslationMap, TranslationTable};

/// Errors raised while reading or parsing a locale file.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// The locale file could not be read.
    #[error("failed to read locale file {path}: {source}")]
    Io {
        /// File that failed to load.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The locale file exists but contains nothing.
    #[error("locale file is empty: {0}")]
    Empty(String),
    /// The YAML content is malformed.
    #[error("failed to parse locale YAML: {0}")]
    Parse(String),
}

/// What: Return the compiled-in YAML source for a language.
///
/// Inputs:
/// - `language`: Language whose locale file to return
///
/// Output:
/// - Raw YAML text of `locales/<code>.yml`
#[must_use]
pub const fn embedded_source(language: LanguageCode) -> &'static str {
    match language {
        LanguageCode::En => include_str!("../../locales/en.yml"),
        LanguageCode::Hi => include_str!("../../locales/hi.yml"),
        LanguageCode::Ta => include_str!("../../locales/ta.yml"),
        LanguageCode::Te => include_str!("../../locales/te.yml"),
        LanguageCode::Kn => include_str!("../../locales/kn.yml"),
    }
}

/// What: Load a locale YAML file from disk and parse it into a `TranslationMap`.
///
/// Inputs:
/// - `language`: Language to load
/// - `locales_dir`: Directory containing `<code>.yml` files
///
/// Output:
/// - `Ok(Some(map))` when the file exists and parses, `Ok(None)` when absent
///
/// # Errors
/// - Returns `Err` when the file cannot be read, is empty, or is not valid YAML
pub fn load_locale_file(
    language: LanguageCode,
    locales_dir: &Path,
) -> Result<Option<TranslationMap>, LocaleError> {
    let file_path = locales_dir.join(format!("{}.yml", language.code()));
    if !file_path.is_file() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&file_path).map_err(|source| LocaleError::Io {
        path: file_path.display().to_string(),
        source,
    })?;

    if contents.trim().is_empty() {
        return Err(LocaleError::Empty(file_path.display().to_string()));
    }

    parse_locale_yaml(&contents).map(Some)
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Inputs:
/// - `yaml_content`: YAML file content as string
///
/// Output:
/// - `Result<TranslationMap, LocaleError>` containing parsed translations
///
/// # Errors
/// - Returns `Err` when the YAML cannot be parsed
///
/// Details:
/// - Expects a top-level key naming the locale (e.g., "hi:")
/// - Flattens nested structure into dot-notation keys
pub fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, LocaleError> {
    let doc: serde_norway::Value =
        serde_norway::from_str(yaml_content).map_err(|e| LocaleError::Parse(e.to_string()))?;

    let mut translations = TranslationMap::new();
    if let Some(locale_obj) = doc.as_mapping() {
        for (_locale_key, locale_value) in locale_obj {
            flatten_yaml_value(locale_value, "", &mut translations);
        }
    }
    Ok(translations)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Inputs:
/// - `value`: Current YAML value
/// - `prefix`: Current key prefix (e.g., "dashboard.quick")
/// - `translations`: Map to populate
///
/// Details:
/// - Scalars other than strings (numbers, booleans) are stored in their YAML text form
/// - Sequences are stored as YAML text under their key
fn flatten_yaml_value(
    value: &serde_norway::Value,
    prefix: &str,
    translations: &mut TranslationMap,
) {
    match value {
        serde_norway::Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let new_prefix = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &new_prefix, translations);
                }
            }
        }
        serde_norway::Value::String(s) => {
            translations.insert(prefix.to_string(), s.clone());
        }
        serde_norway::Value::Null => {}
        other => {
            if let Ok(yaml_str) = serde_norway::to_string(other) {
                translations.insert(prefix.to_string(), yaml_str.trim().to_string());
            }
        }
    }
}

/// What: Build the translation table from embedded locales plus optional overrides.
///
/// Inputs:
/// - `override_dir`: Directory with user-provided `<code>.yml` files, if any
///
/// Output:
/// - `TranslationTable` with one dictionary per supported language
///
/// Details:
/// - Embedded locales that fail to parse are logged and left empty (English fallback still applies)
/// - An override file replaces the embedded dictionary only when it loads cleanly
#[must_use]
pub fn load_table(override_dir: Option<&Path>) -> TranslationTable {
    let mut table = TranslationTable::default();
    for language in LanguageCode::ALL {
        let map = match parse_locale_yaml(embedded_source(language)) {
            Ok(map) => map,
            Err(e) => {
                tracing::error!(language = %language, error = %e, "embedded locale is invalid");
                TranslationMap::new()
            }
        };
        table.insert(language, map);

        let Some(dir) = override_dir else {
            continue;
        };
        match load_locale_file(language, dir) {
            Ok(Some(map)) => {
                tracing::info!(
                    language = %language,
                    keys = map.len(),
                    dir = %dir.display(),
                    "using locale override"
                );
                table.insert(language, map);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(language = %language, error = %e, "ignoring locale override");
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_nested_yaml() {
        let yaml = "hi:\n  app:\n    title: \"शीर्षक\"\n  nav:\n    home: \"होम\"\n    count: 3\n";
        let map = parse_locale_yaml(yaml).expect("valid yaml");
        assert_eq!(map.get("app.title").map(String::as_str), Some("शीर्षक"));
        assert_eq!(map.get("nav.home").map(String::as_str), Some("होम"));
        assert_eq!(map.get("nav.count").map(String::as_str), Some("3"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(matches!(
            parse_locale_yaml("en:\n  app: [unclosed"),
            Err(LocaleError::Parse(_))
        ));
    }

    #[test]
    fn every_embedded_locale_parses() {
        for language in LanguageCode::ALL {
            let map = parse_locale_yaml(embedded_source(language)).expect("embedded locale");
            assert!(
                map.contains_key("app.title"),
                "{language} is missing app.title"
            );
        }
    }

    #[test]
    fn override_dir_replaces_embedded_and_skips_broken_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("ta.yml"),
            "ta:\n  app:\n    title: \"Override\"\n",
        )
        .expect("write ta");
        std::fs::write(dir.path().join("te.yml"), "   \n").expect("write te");

        let table = load_table(Some(dir.path()));
        assert_eq!(table.resolve("app.title", LanguageCode::Ta), "Override");
        // Override drops other Tamil keys, which now fall back to English.
        assert_eq!(
            table.resolve("dashboard.status", LanguageCode::Ta),
            table.resolve("dashboard.status", LanguageCode::En)
        );
        // Empty Telugu override is ignored; embedded title survives.
        assert_eq!(table.resolve("app.title", LanguageCode::Te), "సురక్ష సహాయక్ AI 🇮🇳");
    }
}
