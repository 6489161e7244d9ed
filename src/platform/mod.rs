//! Platform capabilities consumed by the application.
//!
//! Geolocation, speech recognition, speech synthesis and telephony are not
//! implemented here; they are delegated to whatever the host offers (an HTTP
//! lookup, `espeak-ng`, `xdg-open tel:` ...). Each capability is a trait so
//! the runtime can hold real implementations while tests inject fakes.

mod geolocation;
mod speech;
mod telephony;

use std::sync::Arc;

pub use geolocation::{
    DEFAULT_GEOLOCATION_URL, DeniedGeolocator, FixedGeolocator, IpGeolocator, probe_connectivity,
};
pub use speech::{
    CommandRecognizer, CommandSynthesizer, NullSynthesizer, UnavailableRecognizer,
    strip_decorative_symbols,
};
pub use telephony::UriDialer;

use crate::theme::{GeolocationMode, Settings};

/// Failure kinds of a position request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    /// The user (or configuration) does not allow location access.
    #[error("location permission denied")]
    PermissionDenied,
    /// A position could not be obtained.
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
}

/// Failure kinds of the speech capabilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpeechError {
    /// No recognizer/synthesizer is available on this system.
    #[error("speech capability is not supported on this system")]
    Unsupported,
    /// Recognition ran but produced an error.
    #[error("speech recognition failed: {0}")]
    Recognition(String),
}

/// Source of the device's current coordinates.
#[async_trait::async_trait]
pub trait Geolocator: Send + Sync {
    /// What: Obtain the current position once.
    ///
    /// Output:
    /// - `(latitude, longitude)` in decimal degrees
    ///
    /// # Errors
    /// - `GeoError::PermissionDenied` when location access is not allowed
    /// - `GeoError::PositionUnavailable` when no position can be determined
    async fn current_position(&self) -> Result<(f64, f64), GeoError>;
}

/// Single-shot speech-to-text.
pub trait SpeechRecognizer: Send + Sync {
    /// Whether recognition can run at all on this system.
    fn is_available(&self) -> bool;

    /// What: Listen once and return the transcript.
    ///
    /// Inputs:
    /// - `locale`: BCP-47 tag of the expected language (e.g. `hi-IN`)
    ///
    /// # Errors
    /// - `SpeechError::Unsupported` when no recognizer exists
    /// - `SpeechError::Recognition` when listening fails
    ///
    /// Details:
    /// - Blocking; callers run it off the event loop
    fn recognize(&self, locale: &str) -> Result<String, SpeechError>;
}

/// Text-to-speech with a single active utterance.
pub trait SpeechSynthesizer: Send + Sync {
    /// What: Speak `text`, replacing whatever is currently being spoken.
    ///
    /// Inputs:
    /// - `text`: Plain text to speak
    /// - `locale`: BCP-47 tag of the voice language
    /// - `rate`: Relative speed, `1.0` is normal
    /// - `pitch`: Relative pitch, `1.0` is normal
    fn speak(&self, text: &str, locale: &str, rate: f32, pitch: f32);

    /// Stop any utterance in progress.
    fn cancel_all(&self);
}

/// Device dial intent.
pub trait Dialer: Send + Sync {
    /// Trigger a call to `number`. Fire-and-forget: no status is reported back.
    fn dial(&self, number: &str);
}

/// Bundle of capability handles owned by the runtime.
#[derive(Clone)]
pub struct Capabilities {
    /// Position source.
    pub geolocator: Arc<dyn Geolocator>,
    /// Speech-to-text.
    pub recognizer: Arc<dyn SpeechRecognizer>,
    /// Text-to-speech.
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    /// Dial intent.
    pub dialer: Arc<dyn Dialer>,
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("recognizer_available", &self.recognizer.is_available())
            .finish_non_exhaustive()
    }
}

impl Capabilities {
    /// What: Build capabilities from user settings and the tools installed on this host.
    ///
    /// Inputs:
    /// - `settings`: Parsed `settings.conf`
    ///
    /// Output:
    /// - `Capabilities` with the best available implementation of each trait
    ///
    /// Details:
    /// - Missing speech tools degrade to null implementations and are logged once here
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let geolocator: Arc<dyn Geolocator> = match settings.geolocation {
            GeolocationMode::Off => Arc::new(DeniedGeolocator),
            GeolocationMode::Fixed => match (settings.latitude, settings.longitude) {
                (Some(lat), Some(lon)) => Arc::new(FixedGeolocator::new(lat, lon)),
                _ => {
                    tracing::warn!("geolocation = fixed but latitude/longitude missing");
                    Arc::new(DeniedGeolocator)
                }
            },
            GeolocationMode::Ip => Arc::new(IpGeolocator::new(settings.geolocation_url.clone())),
        };

        let recognizer: Arc<dyn SpeechRecognizer> =
            match CommandRecognizer::from_command_line(&settings.speech_recognizer_command) {
                Some(r) => Arc::new(r),
                None => {
                    tracing::info!("no speech recognizer configured; voice input disabled");
                    Arc::new(UnavailableRecognizer)
                }
            };

        let synthesizer: Arc<dyn SpeechSynthesizer> =
            match CommandSynthesizer::detect(&settings.speech_synthesizer_command) {
                Some(s) => {
                    tracing::info!(program = %s.program(), "speech synthesizer available");
                    Arc::new(s)
                }
                None => {
                    tracing::info!("no speech synthesizer found; voice output is silent");
                    Arc::new(NullSynthesizer)
                }
            };

        Self {
            geolocator,
            recognizer,
            synthesizer,
            dialer: Arc::new(UriDialer::detect()),
        }
    }

    /// What: Capabilities that never touch the host (used in headless runs).
    ///
    /// Output:
    /// - Denied geolocation, unavailable recognizer, silent synthesizer, logging dialer
    #[must_use]
    pub fn headless() -> Self {
        Self {
            geolocator: Arc::new(DeniedGeolocator),
            recognizer: Arc::new(UnavailableRecognizer),
            synthesizer: Arc::new(NullSynthesizer),
            dialer: Arc::new(UriDialer::log_only()),
        }
    }
}
