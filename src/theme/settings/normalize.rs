use crate::theme::types::{GeolocationMode, Settings};

/// Longest simulated assistant delay accepted from configuration.
const MAX_REPLY_DELAY_MS: u64 = 30_000;

/// What: Normalize settings values parsed from configuration files.
///
/// Inputs:
/// - `settings`: Mutable reference to `Settings` to normalize in-place.
///
/// Details:
/// - Caps `reply_delay_ms` at 30 s.
/// - Clamps `speech_rate` to 0.1..=2.0 and `speech_pitch` to 0.0..=2.0 (non-finite values reset).
/// - Drops out-of-range coordinates; `fixed` geolocation without both coordinates falls back to `off`.
/// - Trims command strings and the language code.
pub fn normalize(settings: &mut Settings) {
    let defaults = Settings::default();
    settings.reply_delay_ms = settings.reply_delay_ms.min(MAX_REPLY_DELAY_MS);
    settings.speech_rate = if settings.speech_rate.is_finite() {
        settings.speech_rate.clamp(0.1, 2.0)
    } else {
        defaults.speech_rate
    };
    settings.speech_pitch = if settings.speech_pitch.is_finite() {
        settings.speech_pitch.clamp(0.0, 2.0)
    } else {
        defaults.speech_pitch
    };
    settings.latitude = settings
        .latitude
        .filter(|v| v.is_finite() && (-90.0..=90.0).contains(v));
    settings.longitude = settings
        .longitude
        .filter(|v| v.is_finite() && (-180.0..=180.0).contains(v));
    if settings.geolocation == GeolocationMode::Fixed
        && (settings.latitude.is_none() || settings.longitude.is_none())
    {
        tracing::warn!("[Config] geolocation = fixed needs latitude and longitude; disabling");
        settings.geolocation = GeolocationMode::Off;
    }
    settings.language = settings.language.trim().to_string();
    settings.geolocation_url = settings.geolocation_url.trim().to_string();
    settings.speech_recognizer_command = settings.speech_recognizer_command.trim().to_string();
    settings.speech_synthesizer_command = settings.speech_synthesizer_command.trim().to_string();
}
