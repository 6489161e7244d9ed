//! Configuration files: first-run skeletons, missing-key migration, persisted
//! toggles, and the theme loader.

/// Built-in `settings.conf` and `theme.conf` text.
pub(crate) mod skeletons;
/// Appends keys missing from an existing `settings.conf`.
mod settings_ensure;
/// Rewrites single keys in `settings.conf`.
mod settings_save;
/// Theme file parsing with diagnostics.
mod theme_loader;

pub use settings_ensure::ensure_settings_keys_present;
pub use settings_save::{save_language, save_voice_output};
pub(crate) use skeletons::THEME_SKELETON_CONTENT;
pub(crate) use theme_loader::try_load_theme_with_diagnostics;
