//! Key-driven flows through `handle_event`, with replies delivered on the outbox channels.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use suraksha::assistant::IntentCategory;
use suraksha::events::{handle_event, navigate, outbox_pair};
use suraksha::session::Role;
use suraksha::state::{AppState, NavPayload, Route};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test(start_paused = true)]
async fn typed_question_is_answered_on_the_assistant_page() {
    let (outbox, mut inbox) = outbox_pair();
    let mut app = AppState::default();
    navigate(&mut app, Route::Assistant, NavPayload::None, &outbox);
    assert_eq!(app.session.messages().len(), 1, "welcome message");

    for ch in "earthquake".chars() {
        assert!(!handle_event(key(KeyCode::Char(ch)), &mut app, &outbox));
    }
    assert!(!handle_event(key(KeyCode::Enter), &mut app, &outbox));
    assert!(app.session.input.is_empty());

    tokio::time::sleep(Duration::from_millis(1600)).await;
    let reply = inbox.reply_rx.recv().await.expect("reply");
    app.session.apply_reply(&reply);
    let last = app.session.messages().last().expect("reply message");
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.category, Some(IntentCategory::EmergencyResponse));
}

#[tokio::test]
async fn landing_and_unknown_paths_resolve() {
    let (outbox, _inbox) = outbox_pair();
    let mut app = AppState::default();
    navigate(&mut app, Route::from_path("/"), NavPayload::None, &outbox);
    assert_eq!(app.route, Route::Dashboard);
    navigate(&mut app, Route::from_path("/missing"), NavPayload::None, &outbox);
    assert_eq!(app.route, Route::NotFound("/missing".to_string()));
    assert!(!handle_event(key(KeyCode::Enter), &mut app, &outbox));
    assert_eq!(app.route, Route::Dashboard);
}
