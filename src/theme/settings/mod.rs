use std::fs;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::SystemTime;

use crate::theme::paths::settings_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod normalize;
mod parse_keybinds;
mod parse_settings;

use normalize::normalize;
use parse_keybinds::parse_keybinds;
use parse_settings::parse_settings;

struct SettingsCache {
    settings: Settings,
    settings_mtime: Option<SystemTime>,
    initialized: bool,
}

impl SettingsCache {
    fn new() -> Self {
        Self {
            settings: Settings::default(),
            settings_mtime: None,
            initialized: false,
        }
    }
}

static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Load user settings and keybinds from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - Results are cached and re-parsed only when the file modification time changes.
/// - Values are normalized after parsing (delay/rate/pitch clamped, coordinates validated).
#[must_use]
pub fn settings() -> Settings {
    let mut cache = SETTINGS_CACHE
        .get_or_init(|| Mutex::new(SettingsCache::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let path = settings_path();
    let settings_mtime = fs::metadata(&path).and_then(|m| m.modified()).ok();
    if cache.initialized && cache.settings_mtime == settings_mtime {
        if tracing::enabled!(tracing::Level::TRACE) {
            debug!("[Config] Using cached settings (unchanged file)");
        }
        return cache.settings.clone();
    }

    let mut out = Settings::default();
    if let Ok(content) = fs::read_to_string(&path) {
        debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
        parse_settings(&content, &mut out);
        parse_keybinds(&content, &mut out);
    } else {
        warn!(
            path = %path.display(),
            "[Config] settings.conf missing or unreadable, using defaults"
        );
    }
    normalize(&mut out);

    cache.settings_mtime = settings_mtime;
    cache.settings = out.clone();
    cache.initialized = true;
    out
}

/// What: Parse settings text without touching the filesystem or the cache.
///
/// Inputs:
/// - `content`: Full `settings.conf` text
///
/// Output:
/// - Normalized `Settings` with keybinds applied
#[must_use]
pub fn parse_settings_str(content: &str) -> Settings {
    let mut out = Settings::default();
    parse_settings(content, &mut out);
    parse_keybinds(content, &mut out);
    normalize(&mut out);
    out
}
