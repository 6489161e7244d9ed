use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the config base.
const APP_DIR: &str = "suraksha";

/// What: Find an existing config file named `file_name`, searching in priority order.
///
/// Inputs:
/// - `file_name`: File inside the app config directory (e.g. `settings.conf`)
///
/// Output:
/// - First existing candidate under `$HOME/.config/suraksha` then `$XDG_CONFIG_HOME/suraksha`
fn resolve_existing(file_name: &str) -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join(file_name));
    }
    if let Some(xdg) = xdg_config.as_deref()
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(xdg).join(APP_DIR).join(file_name));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Determine the configuration file path for the THEME, if one exists.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    resolve_existing("theme.conf")
}

/// Determine the configuration file path for SETTINGS, if one exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    resolve_existing("settings.conf")
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/suraksha`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for Suraksha (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/suraksha/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Locale override directory: "$HOME/.config/suraksha/locales" (not created)
#[must_use]
pub fn locales_dir() -> PathBuf {
    config_dir().join("locales")
}

/// Where `settings.conf` lives or will be created.
#[must_use]
pub fn settings_path() -> PathBuf {
    resolve_settings_config_path().unwrap_or_else(|| config_dir().join("settings.conf"))
}

#[cfg(test)]
mod tests {
    #[test]
    fn paths_config_logs_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .expect("Test mutex poisoned");
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("HOME", base.path()) };
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with("suraksha"));
        assert!(cfg.is_dir());
        assert!(logs.ends_with("logs"));
        assert!(super::locales_dir().starts_with(&cfg));
        assert_eq!(super::settings_path(), cfg.join("settings.conf"));
        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
