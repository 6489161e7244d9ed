use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels and modals.
    pub mantle: Color,
    /// Darkest background shade, used for text on highlighted rows.
    pub crust: Color,
    /// Subtle surface color for borders of inactive panels.
    pub surface: Color,
    /// Muted line/border color.
    pub overlay: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext: Color,
    /// Accent for headings and the active page.
    pub accent: Color,
    /// Accent for interactive items and the selection.
    pub interactive: Color,
    /// Emergency red: alerts, high severity, the call action.
    pub danger: Color,
    /// Warning/attention (medium severity, offline status).
    pub warning: Color,
    /// Success/positive state (online status, assistant badge).
    pub success: Color,
    /// Informational (low severity, location line).
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface: Color::Rgb(0x45, 0x47, 0x5a),
            overlay: Color::Rgb(0x7f, 0x84, 0x9c),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext: Color::Rgb(0xa6, 0xad, 0xc8),
            accent: Color::Rgb(0xfa, 0xb3, 0x87),
            interactive: Color::Rgb(0x74, 0xc7, 0xec),
            danger: Color::Rgb(0xf3, 0x8b, 0xa8),
            warning: Color::Rgb(0xf9, 0xe2, 0xaf),
            success: Color::Rgb(0xa6, 0xe3, 0xa1),
            info: Color::Rgb(0x89, 0xb4, 0xfa),
        }
    }
}

/// Where the device position comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GeolocationMode {
    /// Approximate position from an IP lookup service.
    #[default]
    Ip,
    /// `latitude`/`longitude` from settings.
    Fixed,
    /// Location access disabled.
    Off,
}

impl GeolocationMode {
    /// Parse a `geolocation` setting value.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ip" | "network" | "auto" => Some(Self::Ip),
            "fixed" | "manual" | "static" => Some(Self::Fixed),
            "off" | "none" | "disabled" | "deny" => Some(Self::Off),
            _ => None,
        }
    }

    /// Value written to `settings.conf`.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Fixed => "fixed",
            Self::Off => "off",
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Startup language code; empty means "detect from the system".
    pub language: String,
    /// Speak assistant replies on startup (toggle at runtime).
    pub voice_output: bool,
    /// Simulated assistant processing time in milliseconds.
    pub reply_delay_ms: u64,
    /// Relative speech rate (1.0 is normal).
    pub speech_rate: f32,
    /// Relative speech pitch (1.0 is normal).
    pub speech_pitch: f32,
    /// Position source.
    pub geolocation: GeolocationMode,
    /// Endpoint for [`GeolocationMode::Ip`]; empty uses the built-in default.
    pub geolocation_url: String,
    /// Latitude for [`GeolocationMode::Fixed`].
    pub latitude: Option<f64>,
    /// Longitude for [`GeolocationMode::Fixed`].
    pub longitude: Option<f64>,
    /// Command producing a transcript on stdout; empty disables voice input.
    pub speech_recognizer_command: String,
    /// Text-to-speech command; empty auto-detects `espeak-ng`/`espeak`/`spd-say`.
    pub speech_synthesizer_command: String,
    /// Configurable key bindings parsed from `keybind_*` entries.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: String::new(),
            voice_output: false,
            reply_delay_ms: 1500,
            speech_rate: 0.8,
            speech_pitch: 1.0,
            geolocation: GeolocationMode::Ip,
            geolocation_url: String::new(),
            latitude: None,
            longitude: None,
            speech_recognizer_command: String::new(),
            speech_synthesizer_command: String::new(),
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Chord with Ctrl held.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            mods: KeyModifiers::CONTROL,
        }
    }

    /// What: Check whether a key event matches this chord.
    ///
    /// Details:
    /// - Character keys compare case-insensitively
    /// - Shift is ignored for characters and `BackTab` (terminals disagree on reporting it)
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        let same_key = match (self.code, code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        if !same_key {
            return false;
        }
        if matches!(self.code, KeyCode::Char(_) | KeyCode::BackTab) {
            self.mods.difference(KeyModifiers::SHIFT) == mods.difference(KeyModifiers::SHIFT)
        } else {
            self.mods == mods
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "Shift+Tab".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        if self.mods.contains(KeyModifiers::SUPER) {
            parts.push("Super");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug)]
pub struct KeyMap {
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Show the keyboard help overlay.
    pub help: Vec<KeyChord>,
    /// Next page in the navbar.
    pub next_page: Vec<KeyChord>,
    /// Previous page in the navbar.
    pub prev_page: Vec<KeyChord>,
    /// Switch to the next supported language.
    pub cycle_language: Vec<KeyChord>,
    /// Toggle speaking assistant replies.
    pub toggle_voice_output: Vec<KeyChord>,
    /// Start voice input.
    pub voice_input: Vec<KeyChord>,
    /// Request the device position.
    pub use_location: Vec<KeyChord>,
    /// Select the next known city.
    pub next_place: Vec<KeyChord>,
    /// Expand/collapse the headlines panel.
    pub toggle_headlines: Vec<KeyChord>,
}

impl KeyMap {
    /// Whether any chord of `bindings` matches the event.
    #[must_use]
    pub fn hit(bindings: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        bindings.iter().any(|c| c.matches(code, mods))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{BackTab, F, Tab};
        Self {
            exit: vec![KeyChord::ctrl('c'), KeyChord::ctrl('q')],
            help: vec![KeyChord::plain(F(1))],
            next_page: vec![KeyChord::plain(Tab)],
            prev_page: vec![KeyChord::plain(BackTab)],
            cycle_language: vec![KeyChord::ctrl('l')],
            toggle_voice_output: vec![KeyChord::ctrl('s')],
            voice_input: vec![KeyChord::ctrl('v')],
            use_location: vec![KeyChord::ctrl('g')],
            next_place: vec![KeyChord::ctrl('n')],
            toggle_headlines: vec![KeyChord::ctrl('e')],
        }
    }
}
