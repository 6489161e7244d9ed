use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// Canonical palette keys, in `Theme` field order.
pub(crate) const PALETTE_KEYS: [&str; 13] = [
    "base",
    "mantle",
    "crust",
    "surface",
    "overlay",
    "text",
    "subtext",
    "accent",
    "interactive",
    "danger",
    "warning",
    "success",
    "info",
];

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "r") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Normalizes character keys to lowercase for consistent matching.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" | "SHIFT+TAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "HOME" => Some(KeyCode::Home),
        "END" => Some(KeyCode::End),
        "PAGEUP" | "PGUP" => Some(KeyCode::PageUp),
        "PAGEDOWN" | "PGDN" => Some(KeyCode::PageDown),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a full key chord such as "Ctrl+L" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `spec`: String specification combining optional modifiers with a key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` on invalid modifier/key combinations.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift/Super modifiers in any case.
/// - Normalizes `Shift+Tab` to the dedicated `BackTab` key code and clears modifiers.
pub(crate) fn parse_key_chord(spec: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<String> = None;
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            "SUPER" | "META" | "WIN" => mods |= KeyModifiers::SUPER,
            _ => key_part = Some(p.to_string()),
        }
    }
    if key_part
        .as_deref()
        .is_some_and(|k| k.eq_ignore_ascii_case("TAB"))
        && mods.contains(KeyModifiers::SHIFT)
    {
        return Some(KeyChord {
            code: KeyCode::BackTab,
            mods: KeyModifiers::empty(),
        });
    }
    let code = parse_key_identifier(key_part.as_deref().unwrap_or(""))?;
    Some(KeyChord { code, mods })
}

/// What: Parse a color literal from configuration text into a [`Color`].
///
/// Inputs:
/// - `s`: Color specification string potentially containing inline comments.
///
/// Output:
/// - `Some(Color)` for recognized hex or decimal triplet formats; `None` otherwise.
///
/// Details:
/// - Accepts `#RRGGBB` hex and `R,G,B` decimal triplets (0-255 per channel).
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Map a normalized theme key (lowercase, underscores) to its canonical palette key.
///
/// Inputs:
/// - `norm`: Normalized key string pulled from user configuration.
///
/// Output:
/// - `Some(&'static str)` containing the canonical key when recognized; `None` otherwise.
pub(crate) fn canonical_for_key(norm: &str) -> Option<&'static str> {
    match norm {
        "base" | "background" | "background_base" => Some("base"),
        "mantle" | "background_mantle" | "panel" => Some("mantle"),
        "crust" | "background_crust" => Some("crust"),
        "surface" | "surface_level1" | "border_inactive" => Some("surface"),
        "overlay" | "overlay_primary" | "border" => Some("overlay"),
        "text" | "text_primary" => Some("text"),
        "subtext" | "text_secondary" => Some("subtext"),
        "accent" | "accent_heading" => Some("accent"),
        "interactive" | "accent_interactive" | "selection" => Some("interactive"),
        "danger" | "semantic_error" | "emergency" => Some("danger"),
        "warning" | "semantic_warning" => Some("warning"),
        "success" | "semantic_success" => Some("success"),
        "info" | "semantic_info" => Some("info"),
        _ => None,
    }
}

/// What: Apply a single `key=value` override to the theme color map with validation.
///
/// Inputs:
/// - `map`: Accumulated theme colors being constructed.
/// - `key`: Raw key string from the configuration file.
/// - `value`: Raw value string associated with the key.
/// - `errors`: Mutable buffer that collects diagnostic messages.
/// - `line_no`: 1-based line number used for contextual messages.
///
/// Details:
/// - Normalizes keys, suggests close matches, and validates color formats before inserting.
pub(crate) fn apply_override_to_map(
    map: &mut std::collections::HashMap<String, Color>,
    key: &str,
    value: &str,
    errors: &mut Vec<String>,
    line_no: usize,
) {
    let norm = normalize_key(key);
    let Some(canon) = canonical_for_key(&norm) else {
        if let Some(s) = nearest_key(&norm) {
            errors.push(format!(
                "- Unknown key '{key}' on line {line_no} (did you mean '{s}'?)"
            ));
        } else {
            errors.push(format!("- Unknown key '{key}' on line {line_no}"));
        }
        return;
    };
    if value.is_empty() {
        errors.push(format!("- Missing value for '{key}' on line {line_no}"));
        return;
    }
    if let Some(c) = parse_color_value(value) {
        map.insert(canon.to_string(), c);
    } else {
        errors.push(format!(
            "- Invalid color for '{key}' on line {line_no} (use #RRGGBB or R,G,B)"
        ));
    }
}

/// What: Suggest the palette key closest to a potentially misspelled input.
///
/// Output:
/// - `Some(&'static str)` when the best match is within edit distance 3; `None` otherwise.
pub(crate) fn nearest_key(input: &str) -> Option<&'static str> {
    PALETTE_KEYS
        .iter()
        .map(|&k| (k, levenshtein(input, k)))
        .min_by_key(|(_, d)| *d)
        .and_then(|(k, d)| (d <= 3).then_some(k))
}

/// What: Compute the Levenshtein edit distance between two strings.
///
/// Details:
/// - Uses a rolling dynamic programming table to reduce allocations while iterating.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let tmp = dp[j + 1];
            let cost = usize::from(ca != *cb);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = tmp;
        }
    }
    dp[b.len()]
}

/// What: Remove inline comments from a configuration value while preserving leading hex markers.
///
/// Inputs:
/// - `s`: Raw configuration value that may include inline comments.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Strips trailing `//` sections and secondary `#` characters without harming leading `#RRGGBB` values.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    let hash = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    };
    if let Some(i) = hash {
        s = &s[..i];
    }
    s.trim()
}

/// Lowercase a config key and map `.`, `-` and spaces to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// Interpret common truthy spellings (`true`, `1`, `yes`, `on`).
pub(crate) fn parse_bool(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// What: Split a config line into normalized key and comment-free value.
///
/// Output:
/// - `None` for blank lines, comments, and lines without `=`
pub(crate) fn split_config_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    Some((normalize_key(raw_key), strip_inline_comment(raw_val.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Ensure key identifier and chord parsing maps strings onto `KeyCode`/modifier combinations.
    fn parsing_key_identifier_and_chord() {
        assert_eq!(parse_key_identifier("F5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key_identifier("?"), Some(KeyCode::Char('?')));
        assert_eq!(parse_key_identifier("Backspace"), Some(KeyCode::Backspace));
        let kc = parse_key_chord("Ctrl+R").expect("chord");
        assert_eq!(kc.code, KeyCode::Char('r'));
        assert!(kc.mods.contains(KeyModifiers::CONTROL));
        let bt = parse_key_chord("Shift+Tab").expect("chord");
        assert_eq!(bt.code, KeyCode::BackTab);
        assert!(bt.mods.is_empty());
        assert!(parse_key_chord("Ctrl+").is_none());
    }

    #[test]
    /// What: Validate colour parsing and key mapping helpers used by theme configuration.
    fn parsing_color_and_canon() {
        assert_eq!(parse_color_value("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color_value("255,0,10"), Some(Color::Rgb(255, 0, 10)));
        assert_eq!(parse_color_value("256,0,0"), None);
        assert!(parse_color_value("").is_none());
        assert_eq!(canonical_for_key("semantic_error"), Some("danger"));
        assert_eq!(nearest_key("dangr"), Some("danger"));
        assert_eq!(nearest_key("completely_unrelated"), None);
    }

    #[test]
    /// What: Check inline comment stripping keeps colour literals while removing trailing annotations.
    fn parsing_strip_inline_comment_variants() {
        assert_eq!(strip_inline_comment("#foo"), "#foo");
        assert_eq!(strip_inline_comment("abc // hi"), "abc");
        assert_eq!(strip_inline_comment("#ff00ff # tail"), "#ff00ff");
    }

    #[test]
    fn config_lines_split_into_key_and_value() {
        assert_eq!(
            split_config_line("Reply-Delay-MS = 900 # faster"),
            Some(("reply_delay_ms".to_string(), "900"))
        );
        assert_eq!(split_config_line("# comment"), None);
        assert_eq!(split_config_line("no equals sign"), None);
        assert!(parse_bool("Yes"));
        assert!(!parse_bool("nope"));
    }
}
