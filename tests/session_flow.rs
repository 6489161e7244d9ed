//! Conversation session behavior: delayed replies, blank input, voice output.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use suraksha::assistant::IntentCategory;
use suraksha::platform::SpeechSynthesizer;
use suraksha::session::{ConversationSession, Role};
use tokio::sync::mpsc;

#[derive(Default)]
struct RecordingSynth {
    calls: Mutex<Vec<String>>,
}

impl SpeechSynthesizer for RecordingSynth {
    fn speak(&self, text: &str, locale: &str, _rate: f32, _pitch: f32) {
        self.calls
            .lock()
            .expect("lock")
            .push(format!("{locale}:{text}"));
    }

    fn cancel_all(&self) {
        self.calls.lock().expect("lock").push("cancel".to_string());
    }
}

#[tokio::test(start_paused = true)]
async fn reply_arrives_after_configured_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = ConversationSession::new(Duration::from_millis(1500));
    assert!(session.send_user_message("  snake bite emergency  ", &tx));
    assert!(session.is_loading());
    assert_eq!(session.messages()[0].body, "snake bite emergency");
    assert!(session.input.is_empty());

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(rx.try_recv().is_err(), "reply must not arrive before the delay");

    let reply = rx.recv().await.expect("reply");
    assert_eq!(reply.category, IntentCategory::Medical);
    let msg = session.apply_reply(&reply);
    assert_eq!(msg.role, Role::Assistant);
    assert!(msg.body.contains("Snake bite"));
    assert!(!session.is_loading());
}

#[tokio::test(start_paused = true)]
async fn overlapping_messages_reply_in_send_order() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = ConversationSession::new(Duration::from_millis(10));
    assert!(session.send_user_message("fire in the kitchen", &tx));
    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(session.send_user_message("is this rumor true", &tx));

    let first = rx.recv().await.expect("first");
    assert_eq!(first.category, IntentCategory::EmergencyResponse);
    session.apply_reply(&first);
    assert!(session.is_loading());

    let second = rx.recv().await.expect("second");
    assert_eq!(second.category, IntentCategory::FactCheck);
    session.apply_reply(&second);

    let categories: Vec<_> = session.messages().iter().map(|m| m.category).collect();
    assert_eq!(
        categories,
        vec![
            None,
            None,
            Some(IntentCategory::EmergencyResponse),
            Some(IntentCategory::FactCheck)
        ]
    );
    assert!(!session.is_loading());
}

#[tokio::test]
async fn blank_message_appends_nothing() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut session = ConversationSession::default();
    assert!(!session.send_user_message("   \n\t", &tx));
    assert!(session.messages().is_empty());
    assert!(!session.is_loading());
}

#[test]
fn spoken_reply_drops_decorations_and_uses_locale() {
    let synth = Arc::new(RecordingSynth::default());
    let mut session = ConversationSession::default();
    session.voice.enabled = true;
    assert!(session.speak_reply(synth.as_ref(), "🚑 **Call 102** now", "ta-IN"));
    let calls = synth.calls.lock().expect("lock");
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("ta-IN:"));
    assert!(!calls[0].contains("**"));
    assert!(!calls[0].contains('🚑'));
    assert!(calls[0].contains("Call 102"));
}
