use std::fs;

use crate::theme::config::skeletons::SETTINGS_SKELETON_CONTENT;
use crate::theme::parsing::split_config_line;
use crate::theme::paths::settings_path;

/// What: Persist one `key = value` pair to settings.conf, preserving comments and other keys.
///
/// Inputs:
/// - `key_norm`: Normalized key to replace
/// - `value`: New value text
///
/// Details:
/// - Every existing line for the key is rewritten; the key is appended when absent.
/// - A missing or empty file is seeded from the skeleton first.
fn save_key(key_norm: &str, value: &str) {
    let p = settings_path();
    if let Some(dir) = p.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let mut lines: Vec<String> = fs::read_to_string(&p)
        .ok()
        .filter(|c| !c.trim().is_empty())
        .as_deref()
        .unwrap_or(SETTINGS_SKELETON_CONTENT)
        .lines()
        .map(ToString::to_string)
        .collect();
    let mut replaced = false;
    for line in &mut lines {
        if split_config_line(line).is_some_and(|(k, _)| k == key_norm) {
            *line = format!("{key_norm} = {value}");
            replaced = true;
        }
    }
    if !replaced {
        lines.push(format!("{key_norm} = {value}"));
    }
    let mut new_content = lines.join("\n");
    new_content.push('\n');
    if let Err(e) = fs::write(&p, new_content) {
        tracing::warn!(path = %p.display(), key = key_norm, error = %e, "[Config] save failed");
    }
}

/// Persist the active language code so the next start uses it.
pub fn save_language(code: &str) {
    save_key("language", code);
}

/// Persist the voice output toggle.
pub fn save_voice_output(enabled: bool) {
    save_key("voice_output", if enabled { "true" } else { "false" });
}
