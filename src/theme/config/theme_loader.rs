use ratatui::style::Color;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::theme::parsing::{apply_override_to_map, canonical_for_key, normalize_key};
use crate::theme::types::Theme;

/// What: Parse a theme configuration file containing `key = value` color pairs into a `Theme`.
///
/// Inputs:
/// - `path`: Filesystem location of the theme configuration.
///
/// Output:
/// - `Ok(Theme)` with overrides applied onto the built-in palette.
/// - `Err(String)` containing newline-separated diagnostics when parsing fails.
///
/// Details:
/// - Keys are optional; anything left out keeps its default color.
/// - Detects duplicates, unknown keys (with suggestions), and invalid color formats with line info.
pub fn try_load_theme_with_diagnostics(path: &Path) -> Result<Theme, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("{e}"))?;
    parse_theme(&content)
}

/// Theme parsing over in-memory text; see [`try_load_theme_with_diagnostics`].
pub(crate) fn parse_theme(content: &str) -> Result<Theme, String> {
    let mut map: HashMap<String, Color> = HashMap::new();
    let mut errors: Vec<String> = Vec::new();
    let mut seen_keys: HashSet<String> = HashSet::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val)) = trimmed.split_once('=') else {
            errors.push(format!("- Missing '=' on line {line_no}"));
            continue;
        };
        let key = raw_key.trim();
        if key.is_empty() {
            errors.push(format!("- Missing key before '=' on line {line_no}"));
            continue;
        }
        let norm = normalize_key(key);
        let canon_or_norm = canonical_for_key(&norm).unwrap_or(norm.as_str());
        if !seen_keys.insert(canon_or_norm.to_string()) {
            errors.push(format!("- Duplicate key '{key}' on line {line_no}"));
        }
        apply_override_to_map(&mut map, key, val.trim(), &mut errors, line_no);
    }
    if !errors.is_empty() {
        return Err(errors.join("\n"));
    }
    let mut theme = Theme::default();
    for (name, color) in map {
        let slot = match name.as_str() {
            "base" => &mut theme.base,
            "mantle" => &mut theme.mantle,
            "crust" => &mut theme.crust,
            "surface" => &mut theme.surface,
            "overlay" => &mut theme.overlay,
            "text" => &mut theme.text,
            "subtext" => &mut theme.subtext,
            "accent" => &mut theme.accent,
            "interactive" => &mut theme.interactive,
            "danger" => &mut theme.danger,
            "warning" => &mut theme.warning,
            "success" => &mut theme.success,
            "info" => &mut theme.info,
            _ => continue,
        };
        *slot = color;
    }
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::config::THEME_SKELETON_CONTENT;

    #[test]
    fn skeleton_parses_to_default_palette() {
        assert_eq!(parse_theme(THEME_SKELETON_CONTENT), Ok(Theme::default()));
    }

    #[test]
    fn partial_override_keeps_other_colors() {
        let theme = parse_theme("emergency = 255,0,0\n").expect("valid");
        assert_eq!(theme.danger, Color::Rgb(255, 0, 0));
        assert_eq!(theme.text, Theme::default().text);
    }

    #[test]
    /// What: Diagnostics report every problem with its line number.
    fn diagnostics_collect_all_errors() {
        let err = parse_theme("text = #zzzzzz\ndangr = #ff0000\nbase = #000000\nbackground = #111111\nnope\n")
            .expect_err("invalid");
        assert!(err.contains("Invalid color for 'text' on line 1"));
        assert!(err.contains("did you mean 'danger'"));
        assert!(err.contains("Duplicate key 'background' on line 4"));
        assert!(err.contains("Missing '=' on line 5"));
    }
}
