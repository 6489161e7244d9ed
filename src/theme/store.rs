use std::fs;
use std::sync::OnceLock;

use super::config::{THEME_SKELETON_CONTENT, try_load_theme_with_diagnostics};
use super::paths::{config_dir, resolve_theme_config_path};
use super::types::Theme;

/// Global theme store, loaded on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Load the palette used at startup.
///
/// Details:
/// - Writes the skeleton `theme.conf` when none exists.
/// - Invalid files are logged and the built-in palette is used; the app never exits over colors.
fn load_initial_theme() -> Theme {
    let Some(path) = resolve_theme_config_path() else {
        let target = config_dir().join("theme.conf");
        if let Err(e) = fs::write(&target, THEME_SKELETON_CONTENT) {
            tracing::debug!(path = %target.display(), error = %e, "could not write theme skeleton");
        } else {
            tracing::info!(path = %target.display(), "wrote default theme skeleton");
        }
        return Theme::default();
    };
    match try_load_theme_with_diagnostics(&path) {
        Ok(t) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            t
        }
        Err(msg) => {
            tracing::error!(
                path = %path.display(),
                error = %msg,
                "theme configuration errors; using built-in palette"
            );
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading from config on first use.
///
/// Searched in `$HOME/.config/suraksha/theme.conf` then `$XDG_CONFIG_HOME/suraksha/theme.conf`.
/// Format: key = value, one per line; values are colors as "#RRGGBB" or "R,G,B".
#[must_use]
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(load_initial_theme)
}
