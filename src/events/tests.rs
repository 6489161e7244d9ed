//! Event dispatch tests.

use std::sync::Arc;
use std::sync::Mutex;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::assistant::IntentCategory;
use crate::i18n::LanguageCode;
use crate::location::LocationSelection;
use crate::platform::{Dialer, FixedGeolocator};
use crate::session::{RecognitionEvent, Role};
use crate::state::{Modal, NavPayload};

fn key(code: KeyCode) -> CEvent {
    CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> CEvent {
    CEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

#[derive(Default)]
struct RecordingDialer(Mutex<Vec<String>>);

impl Dialer for RecordingDialer {
    fn dial(&self, number: &str) {
        self.0.lock().expect("lock").push(number.to_string());
    }
}

#[test]
fn exit_chord_requests_exit_and_help_opens_modal() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    assert!(!handle_event(key(KeyCode::F(1)), &mut app, &outbox));
    assert_eq!(app.modal, Modal::Help);
    // Behind a modal only modal keys apply, even the exit chord is swallowed.
    assert!(!handle_event(ctrl('c'), &mut app, &outbox));
    assert!(!handle_event(key(KeyCode::Esc), &mut app, &outbox));
    assert_eq!(app.modal, Modal::None);
    assert!(handle_event(ctrl('c'), &mut app, &outbox));
}

#[test]
fn tab_cycles_pages_and_language_key_switches_language() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    handle_event(key(KeyCode::Tab), &mut app, &outbox);
    assert_eq!(app.route, Route::Emergency);
    handle_event(key(KeyCode::BackTab), &mut app, &outbox);
    assert_eq!(app.route, Route::Dashboard);
    handle_event(ctrl('l'), &mut app, &outbox);
    assert_eq!(app.language, LanguageCode::Hi);
    assert!(app.toast_message.is_some());
}

#[test]
fn next_place_key_selects_first_city() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    handle_event(ctrl('n'), &mut app, &outbox);
    assert_eq!(
        app.location.selection(),
        &LocationSelection::Named("Mumbai, Maharashtra".into())
    );
}

#[test]
fn enter_on_contact_dials_literal_number() {
    let (outbox, _inbox) = outbox_pair();
    let dialer = Arc::new(RecordingDialer::default());
    let mut app = AppState::default();
    app.capabilities.dialer = dialer.clone();
    app.route = Route::Emergency;
    for _ in 0..3 {
        handle_event(key(KeyCode::Down), &mut app, &outbox);
    }
    handle_event(key(KeyCode::Enter), &mut app, &outbox);
    assert_eq!(*dialer.0.lock().expect("lock"), vec!["102".to_string()]);
    assert_eq!(app.toast_message.as_deref(), Some("Dialing 102..."));
}

#[test]
fn call_key_dials_national_number_from_any_selection() {
    let (outbox, _inbox) = outbox_pair();
    let dialer = Arc::new(RecordingDialer::default());
    let mut app = AppState::default();
    app.capabilities.dialer = dialer.clone();
    app.route = Route::Emergency;
    handle_event(key(KeyCode::End), &mut app, &outbox);
    handle_event(key(KeyCode::Char('c')), &mut app, &outbox);
    assert_eq!(*dialer.0.lock().expect("lock"), vec!["112".to_string()]);
    assert_eq!(app.toast_message.as_deref(), Some("Dialing 112..."));
    assert_eq!(app.route, Route::Emergency);
}

#[test]
fn unknown_route_returns_to_dashboard() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    navigate(
        &mut app,
        Route::from_path("/nowhere"),
        NavPayload::None,
        &outbox,
    );
    assert_eq!(app.route, Route::NotFound("/nowhere".into()));
    handle_event(key(KeyCode::Enter), &mut app, &outbox);
    assert_eq!(app.route, Route::Dashboard);
}

#[test]
fn landing_redirects_to_dashboard() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    app.route = Route::Emergency;
    navigate(&mut app, Route::Landing, NavPayload::None, &outbox);
    assert_eq!(app.route, Route::Dashboard);
}

#[test]
fn voice_input_without_recognizer_opens_alert() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    handle_event(ctrl('v'), &mut app, &outbox);
    assert_eq!(app.route, Route::Assistant);
    assert!(matches!(app.modal, Modal::Alert { .. }));
    assert!(!app.session.is_listening());
}

#[tokio::test]
/// What: A quick action tile sends its prompt right after the welcome message.
async fn quick_action_sends_prompt_to_assistant() {
    let (outbox, mut inbox) = outbox_pair();
    let mut app = AppState::default();
    app.apply_settings(crate::theme::Settings {
        reply_delay_ms: 0,
        ..crate::theme::Settings::default()
    });
    for _ in 0..2 {
        handle_event(key(KeyCode::Down), &mut app, &outbox);
    }
    handle_event(key(KeyCode::Enter), &mut app, &outbox);

    assert_eq!(app.route, Route::Assistant);
    let log = app.session.messages();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].role, Role::Assistant);
    assert_eq!(log[1].body, "Someone is bleeding. What first aid can I give?");
    assert!(app.session.is_loading());

    let reply = inbox.reply_rx.recv().await.expect("reply");
    assert_eq!(reply.category, IntentCategory::Medical);
}

#[tokio::test]
async fn typed_message_is_sent_and_input_cleared() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    navigate(&mut app, Route::Assistant, NavPayload::None, &outbox);
    for ch in "help".chars() {
        handle_event(key(KeyCode::Char(ch)), &mut app, &outbox);
    }
    handle_event(key(KeyCode::Backspace), &mut app, &outbox);
    assert_eq!(app.session.input, "hel");
    handle_event(key(KeyCode::Enter), &mut app, &outbox);
    assert!(app.session.input.is_empty());
    assert_eq!(app.session.messages().last().map(|m| m.body.as_str()), Some("hel"));

    // Blank input sends nothing.
    let before = app.session.messages().len();
    handle_event(key(KeyCode::Enter), &mut app, &outbox);
    assert_eq!(app.session.messages().len(), before);
}

#[tokio::test]
async fn location_request_reports_through_geo_channel() {
    let (outbox, mut inbox) = outbox_pair();
    let mut app = AppState::default();
    app.capabilities.geolocator = Arc::new(FixedGeolocator::new(19.07, 72.87));
    handle_event(ctrl('g'), &mut app, &outbox);
    assert!(app.location.in_flight());
    // A second press while in flight starts nothing new.
    handle_event(ctrl('g'), &mut app, &outbox);

    let result = inbox.geo_rx.recv().await.expect("geo result");
    let selection = app.location.apply_position(result).expect("position");
    assert!(selection.to_string().contains("19.07"));
    assert!(inbox.geo_rx.try_recv().is_err());
}

#[tokio::test]
async fn dictated_transcript_fills_input() {
    struct Echo;
    impl crate::platform::SpeechRecognizer for Echo {
        fn is_available(&self) -> bool {
            true
        }
        fn recognize(&self, locale: &str) -> Result<String, crate::platform::SpeechError> {
            Ok(format!("heard in {locale}"))
        }
    }
    let (outbox, mut inbox) = outbox_pair();
    let mut app = AppState::default();
    app.capabilities.recognizer = Arc::new(Echo);
    navigate(&mut app, Route::Assistant, NavPayload::VoiceMode, &outbox);
    assert!(app.session.is_listening());

    let event = inbox.recognition_rx.recv().await.expect("transcript");
    assert_eq!(event, RecognitionEvent::Transcript("heard in en-IN".into()));
    app.session.apply_recognition(event);
    assert_eq!(app.session.input, "heard in en-IN");
    assert!(!app.session.is_listening());
}
