use crate::theme::parsing::{parse_bool, split_config_line};
use crate::theme::types::{GeolocationMode, Settings};

/// What: Parse non-keybind settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unparseable numbers keep the current value; unknown keys are ignored.
/// - Intentionally ignores `keybind_*` entries (handled separately).
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_config_line(line) else {
            continue;
        };
        match key.as_str() {
            "language" | "locale" | "lang" => {
                settings.language = val.to_string();
            }
            "voice_output" | "speak_replies" => {
                settings.voice_output = parse_bool(val);
            }
            "reply_delay_ms" | "reply_delay" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.reply_delay_ms = v;
                }
            }
            "speech_rate" | "voice_rate" => {
                if let Ok(v) = val.parse::<f32>() {
                    settings.speech_rate = v;
                }
            }
            "speech_pitch" | "voice_pitch" => {
                if let Ok(v) = val.parse::<f32>() {
                    settings.speech_pitch = v;
                }
            }
            "geolocation" | "location_source" => match GeolocationMode::from_config_key(val) {
                Some(mode) => settings.geolocation = mode,
                None => tracing::warn!(value = val, "[Config] unknown geolocation mode"),
            },
            "geolocation_url" => {
                settings.geolocation_url = val.to_string();
            }
            "latitude" | "lat" => {
                settings.latitude = val.parse::<f64>().ok();
            }
            "longitude" | "lon" | "lng" => {
                settings.longitude = val.parse::<f64>().ok();
            }
            "speech_recognizer_command" | "recognizer_command" => {
                settings.speech_recognizer_command = val.to_string();
            }
            "speech_synthesizer_command" | "synthesizer_command" | "tts_command" => {
                settings.speech_synthesizer_command = val.to_string();
            }
            _ => {}
        }
    }
}
