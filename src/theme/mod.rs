//! Theme and settings for Suraksha.
//!
//! Colors come from `theme.conf`, preferences and key bindings from
//! `settings.conf`, both under `$HOME/.config/suraksha` (or `$XDG_CONFIG_HOME`).

/// Configuration file management.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access and caching.
mod settings;
/// Theme store and caching.
mod store;
/// Theme type definitions.
mod types;

pub use config::{ensure_settings_keys_present, save_language, save_voice_output};
pub use paths::{config_dir, locales_dir, logs_dir, settings_path};
pub use settings::{parse_settings_str, settings};
pub use store::theme;
pub use types::{GeolocationMode, KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that mutate `HOME` or config files.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
