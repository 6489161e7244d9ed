//! Page changes and the actions that start background work.

use crate::i18n;
use crate::platform::SpeechError;
use crate::state::{AppState, Modal, NavPayload, Route};

use super::Outbox;

/// What: Show a page, applying its navigation payload.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `route`: Destination (`Landing` redirects to the dashboard)
/// - `payload`: Prompt or voice mode for the assistant page
/// - `outbox`: Channels for work started by the payload
///
/// Details:
/// - Arriving at the assistant appends the welcome message first (once per session),
///   then sends the prompt or starts listening.
/// - Payloads addressed to other pages are ignored.
pub fn navigate(app: &mut AppState, route: Route, payload: NavPayload, outbox: &Outbox) {
    let route = if route == Route::Landing {
        Route::Dashboard
    } else {
        route
    };
    tracing::debug!(path = route.path(), "navigate");
    app.route = route;
    if !app.on_assistant() {
        return;
    }
    app.session.ensure_welcome();
    match payload {
        NavPayload::Prompt(prompt) => send_message(app, &prompt, outbox),
        NavPayload::VoiceMode => start_voice_input(app, outbox),
        NavPayload::None => {}
    }
}

/// Send `text` as a user message; blank text is ignored by the session.
pub fn send_message(app: &mut AppState, text: &str, outbox: &Outbox) {
    if app.session.send_user_message(text, &outbox.reply_tx) {
        app.quick_response_selected = None;
    }
}

/// What: Start voice input in the active language.
///
/// Details:
/// - An unavailable recognizer opens a blocking alert.
/// - A second request while listening is ignored.
pub fn start_voice_input(app: &mut AppState, outbox: &Outbox) {
    let locale = app.language.speech_locale();
    let recognizer = app.capabilities.recognizer.clone();
    match app
        .session
        .start_listening(recognizer, locale, &outbox.recognition_tx)
    {
        Ok(true) => tracing::debug!(locale, "voice input started"),
        Ok(false) => {}
        Err(SpeechError::Unsupported) => {
            app.modal = Modal::Alert {
                message: i18n::t(app, "modals.alert.speech_unsupported"),
            };
        }
        Err(e) => tracing::warn!(error = %e, "voice input could not start"),
    }
}

/// What: Ask the geolocator for the device position in the background.
///
/// Details:
/// - Single-shot: ignored while a request is in flight; the result arrives on `geo_tx`.
pub fn request_location(app: &mut AppState, outbox: &Outbox) {
    if !app.location.begin_position_request() {
        return;
    }
    let geolocator = app.capabilities.geolocator.clone();
    let tx = outbox.geo_tx.clone();
    tokio::spawn(async move {
        let result = geolocator.current_position().await;
        let _ = tx.send(result);
    });
}
