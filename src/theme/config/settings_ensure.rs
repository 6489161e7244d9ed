use std::collections::HashSet;
use std::fs;

use crate::theme::config::skeletons::SETTINGS_SKELETON_CONTENT;
use crate::theme::parsing::split_config_line;
use crate::theme::paths::settings_path;
use crate::theme::types::Settings;

/// What: Ensure all expected settings keys exist in `settings.conf`, appending defaults as needed.
///
/// Inputs:
/// - `prefs`: Current in-memory settings whose values seed the file when keys are missing.
///
/// Output:
/// - None.
///
/// Details:
/// - Preserves existing lines and comments while adding only absent keys.
/// - Creates the settings file from the skeleton when it is missing or empty.
/// - Write failures are logged; startup continues with in-memory settings.
pub fn ensure_settings_keys_present(prefs: &Settings) {
    let p = settings_path();
    if let Some(dir) = p.parent() {
        let _ = fs::create_dir_all(dir);
    }

    let existing = fs::read_to_string(&p).ok().filter(|c| !c.trim().is_empty());
    let created_new = existing.is_none();
    let mut lines: Vec<String> = existing
        .as_deref()
        .unwrap_or(SETTINGS_SKELETON_CONTENT)
        .lines()
        .map(ToString::to_string)
        .collect();

    let have: HashSet<String> = lines
        .iter()
        .filter_map(|l| split_config_line(l).map(|(k, _)| k))
        .collect();
    let pairs: [(&str, String); 7] = [
        ("language", prefs.language.clone()),
        ("voice_output", prefs.voice_output.to_string()),
        ("reply_delay_ms", prefs.reply_delay_ms.to_string()),
        ("speech_rate", prefs.speech_rate.to_string()),
        ("speech_pitch", prefs.speech_pitch.to_string()),
        ("geolocation", prefs.geolocation.as_config_key().to_string()),
        ("geolocation_url", prefs.geolocation_url.clone()),
    ];
    let mut appended_any = false;
    for (k, v) in &pairs {
        if !have.contains(*k) {
            lines.push(format!("{k} = {v}"));
            appended_any = true;
        }
    }
    if created_new || appended_any {
        let mut new_content = lines.join("\n");
        new_content.push('\n');
        if let Err(e) = fs::write(&p, new_content) {
            tracing::warn!(path = %p.display(), error = %e, "[Config] could not write settings.conf");
        } else {
            tracing::debug!(path = %p.display(), created_new, "[Config] settings.conf keys ensured");
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: A missing file gets the skeleton; an old file gets only the missing keys appended.
    fn ensure_creates_skeleton_then_appends_missing_keys() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .expect("Test mutex poisoned");
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("HOME", base.path()) };
        let path = base
            .path()
            .join(".config")
            .join("suraksha")
            .join("settings.conf");

        super::ensure_settings_keys_present(&crate::theme::Settings::default());
        let created = std::fs::read_to_string(&path).expect("skeleton written");
        assert!(created.contains("keybind_voice_input = Ctrl+V"));
        assert!(created.contains("reply_delay_ms = 1500"));

        std::fs::write(&path, "# mine\nlanguage = kn\n").expect("overwrite");
        super::ensure_settings_keys_present(&crate::theme::Settings::default());
        let updated = std::fs::read_to_string(&path).expect("read back");
        assert!(updated.starts_with("# mine\nlanguage = kn\n"));
        assert_eq!(updated.matches("language =").count(), 1);
        assert!(updated.contains("geolocation = ip"));

        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
