use crate::theme::parsing::{parse_key_chord, split_config_line};
use crate::theme::types::{KeyChord, Settings};

/// What: Add a parsed key chord to a keymap field, avoiding duplicates.
///
/// Details:
/// - The first configured chord for an action replaces the built-in defaults;
///   further lines for the same action append.
fn assign_keybind(chord: KeyChord, target: &mut Vec<KeyChord>, replaced: &mut bool) {
    if !*replaced {
        target.clear();
        *replaced = true;
    }
    if target
        .iter()
        .all(|c| c.code != chord.code || c.mods != chord.mods)
    {
        target.push(chord);
    }
}

/// What: Parse `keybind_*` entries from settings.conf into `settings.keymap`.
///
/// Inputs:
/// - `content`: Settings file text
/// - `settings`: Settings whose keymap is updated
///
/// Details:
/// - Invalid chords and unknown actions are logged and skipped.
pub fn parse_keybinds(content: &str, settings: &mut Settings) {
    let mut replaced = [false; 10];
    for line in content.lines() {
        let Some((key, val)) = split_config_line(line) else {
            continue;
        };
        let Some(action) = key.strip_prefix("keybind_") else {
            continue;
        };
        let Some(chord) = parse_key_chord(val) else {
            tracing::warn!(key = %key, value = val, "[Config] invalid key chord");
            continue;
        };
        let km = &mut settings.keymap;
        let (slot, target) = match action {
            "exit" | "quit" => (0, &mut km.exit),
            "help" | "help_overlay" => (1, &mut km.help),
            "next_page" | "page_next" => (2, &mut km.next_page),
            "prev_page" | "page_prev" => (3, &mut km.prev_page),
            "cycle_language" | "language" => (4, &mut km.cycle_language),
            "toggle_voice_output" | "voice_output" => (5, &mut km.toggle_voice_output),
            "voice_input" | "listen" => (6, &mut km.voice_input),
            "use_location" | "locate" => (7, &mut km.use_location),
            "next_place" | "cycle_place" => (8, &mut km.next_place),
            "toggle_headlines" | "headlines" => (9, &mut km.toggle_headlines),
            _ => {
                tracing::warn!(key = %key, "[Config] unknown keybind action");
                continue;
            }
        };
        assign_keybind(chord, target, &mut replaced[slot]);
    }
}
