use std::time::Instant;

use crate::events::GeoResult;
use crate::i18n;
use crate::platform::GeoError;
use crate::session::{AssistantReply, RecognitionEvent};
use crate::state::AppState;

/// What: Append a delivered assistant reply and speak it when voice output is on.
pub fn handle_reply(app: &mut AppState, reply: &AssistantReply) {
    let text = app.session.apply_reply(reply).body.clone();
    let synthesizer = app.capabilities.synthesizer.clone();
    app.session
        .speak_reply(synthesizer.as_ref(), &text, app.language.speech_locale());
}

/// Apply a voice input result to the pending message.
pub fn handle_recognition(app: &mut AppState, event: RecognitionEvent) {
    app.session.apply_recognition(event);
}

/// What: Apply a geolocation result.
///
/// Details:
/// - Success selects the current position and confirms it in a toast
/// - Failure keeps the previous selection and explains why in a toast
pub fn handle_position(app: &mut AppState, result: GeoResult) {
    let message = match app.location.apply_position(result) {
        Ok(selection) => i18n::t_fmt1(app, "location.set", selection),
        Err(GeoError::PermissionDenied) => i18n::t(app, "location.denied"),
        Err(GeoError::PositionUnavailable(_)) => i18n::t(app, "location.unavailable"),
    };
    app.show_toast(message);
}

/// Record the latest connectivity probe.
pub fn handle_online_status(app: &mut AppState, online: bool) {
    if app.online != online {
        tracing::info!(online, "connectivity changed");
    }
    app.online = online;
}

/// Periodic housekeeping.
pub fn handle_tick(app: &mut AppState) {
    app.expire_toast(Instant::now());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::IntentCategory;
    use crate::location::LocationSelection;
    use crate::platform::{Capabilities, SpeechSynthesizer};
    use crate::session::Role;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSynth(Mutex<Vec<(String, String)>>);

    impl SpeechSynthesizer for RecordingSynth {
        fn speak(&self, text: &str, locale: &str, _rate: f32, _pitch: f32) {
            self.0
                .lock()
                .expect("lock")
                .push((text.to_string(), locale.to_string()));
        }
        fn cancel_all(&self) {}
    }

    fn app_with_synth(synth: Arc<RecordingSynth>) -> AppState {
        let mut app = AppState::default();
        app.capabilities = Capabilities {
            synthesizer: synth,
            ..Capabilities::headless()
        };
        app
    }

    #[test]
    fn reply_is_appended_and_spoken_in_active_locale() {
        let synth = Arc::new(RecordingSynth::default());
        let mut app = app_with_synth(synth.clone());
        app.session.voice.enabled = true;
        app.language = crate::i18n::LanguageCode::Hi;
        let reply = AssistantReply {
            category: IntentCategory::Medical,
            text: "🚑 **Call 102** now",
        };
        handle_reply(&mut app, &reply);

        let last = app.session.messages().last().expect("message");
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.category, Some(IntentCategory::Medical));
        let spoken = synth.0.lock().expect("lock");
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].1, "hi-IN");
        assert!(!spoken[0].0.contains("**"));
    }

    #[test]
    fn reply_is_silent_when_voice_output_is_off() {
        let synth = Arc::new(RecordingSynth::default());
        let mut app = app_with_synth(synth.clone());
        let reply = AssistantReply {
            category: IntentCategory::General,
            text: "ok",
        };
        handle_reply(&mut app, &reply);
        assert_eq!(app.session.messages().len(), 1);
        assert!(synth.0.lock().expect("lock").is_empty());
    }

    #[test]
    fn position_success_and_failure_toasts() {
        let mut app = AppState::default();
        app.location.select_named("Delhi");

        handle_position(&mut app, Err(GeoError::PermissionDenied));
        assert_eq!(
            app.location.selection(),
            &LocationSelection::Named("Delhi".to_string())
        );
        assert!(app.toast_message.is_some());

        handle_position(&mut app, Ok((12.97, 77.59)));
        assert!(matches!(
            app.location.selection(),
            LocationSelection::Current { .. }
        ));
        assert!(
            app.toast_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Location: "))
        );
    }

    #[test]
    fn recognition_fills_input_and_stops_listening() {
        let mut app = AppState::default();
        handle_recognition(&mut app, RecognitionEvent::Transcript("help".into()));
        assert_eq!(app.session.input, "help");
        assert!(!app.session.is_listening());
    }

    #[test]
    fn online_status_is_recorded() {
        let mut app = AppState::default();
        handle_online_status(&mut app, false);
        assert!(!app.online);
    }
}
