/// Skeleton `settings.conf` written on first run.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Suraksha settings\n\
#\n\
# Format: key = value. Lines starting with # are comments.\n\
#\n\
# Startup language: en, hi, ta, te, kn. Leave empty to follow the system locale.\n\
language =\n\
#\n\
# Speak assistant replies aloud (toggle at runtime with keybind_toggle_voice_output)\n\
voice_output = false\n\
#\n\
# Simulated assistant thinking time in milliseconds\n\
reply_delay_ms = 1500\n\
#\n\
# Speech prosody relative to normal (1.0)\n\
speech_rate = 0.8\n\
speech_pitch = 1.0\n\
#\n\
# Where \"use my location\" gets a position from: ip, fixed, off\n\
geolocation = ip\n\
# Lookup endpoint for ip mode (JSON with latitude/longitude); empty uses the default\n\
geolocation_url =\n\
# Coordinates for fixed mode\n\
# latitude = 19.0760\n\
# longitude = 72.8777\n\
#\n\
# Voice input: command printing a transcript on stdout ({locale} is replaced).\n\
# Empty disables voice input.\n\
speech_recognizer_command =\n\
# Text to speech: espeak-ng, espeak, spd-say or a custom command. Empty auto-detects.\n\
speech_synthesizer_command =\n\
#\n\
# ---------- Key bindings ----------\n\
# Chords: Ctrl/Alt/Shift/Super + key (F1, Tab, Esc, a..z). Repeat a line to add chords.\n\
keybind_exit = Ctrl+C\n\
keybind_exit = Ctrl+Q\n\
keybind_help = F1\n\
keybind_next_page = Tab\n\
keybind_prev_page = Shift+Tab\n\
keybind_cycle_language = Ctrl+L\n\
keybind_toggle_voice_output = Ctrl+S\n\
keybind_voice_input = Ctrl+V\n\
keybind_use_location = Ctrl+G\n\
keybind_next_place = Ctrl+N\n\
keybind_toggle_headlines = Ctrl+E\n";

/// Skeleton `theme.conf` with the default palette.
pub const THEME_SKELETON_CONTENT: &str = "# Suraksha theme configuration\n\
#\n\
# Format: key = value\n\
# Value formats supported:\n\
#   - #RRGGBB (hex)\n\
#   - R,G,B (decimal, 0-255 each)\n\
# Keys left out keep their built-in color.\n\
#\n\
# Background layers (from darkest to lightest)\n\
background_base = #1e1e2e\n\
background_mantle = #181825\n\
background_crust = #11111b\n\
#\n\
# Borders\n\
surface = #45475a\n\
overlay = #7f849c\n\
#\n\
# Text hierarchy\n\
text_primary = #cdd6f4\n\
text_secondary = #a6adc8\n\
#\n\
# Accents\n\
accent_heading = #fab387\n\
accent_interactive = #74c7ec\n\
#\n\
# Semantic colors (emergency red, warnings, status, location)\n\
semantic_error = #f38ba8\n\
semantic_warning = #f9e2af\n\
semantic_success = #a6e3a1\n\
semantic_info = #89b4fa\n";
