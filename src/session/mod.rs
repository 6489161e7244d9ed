//! Conversation session: the append-only chat log and its side channels.
//!
//! Sending a message appends it immediately and schedules the assistant's
//! reply on a `tokio` task that sleeps for the configured delay before
//! reporting back through a channel. The event loop owns the session and
//! applies replies as they arrive, so the log only ever grows at the end.
//!
//! Voice input runs one blocking recognition at a time; voice output hands
//! each reply to the synthesizer with decorative symbols removed.

mod message;

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::sync::mpsc;

pub use message::{ChatMessage, Role};

use crate::assistant::{self, IntentCategory, WELCOME_MESSAGE};
use crate::platform::{SpeechError, SpeechRecognizer, SpeechSynthesizer, strip_decorative_symbols};

/// Default delay before an assistant reply appears.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Reply produced by a delayed assistant task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    /// Category the user message was routed to.
    pub category: IntentCategory,
    /// Canned response text.
    pub text: &'static str,
}

/// Outcome of a voice-input session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Speech was recognized.
    Transcript(String),
    /// Recognition failed.
    Error(SpeechError),
}

/// Voice output preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceOutput {
    /// Speak assistant replies.
    pub enabled: bool,
    /// Relative speaking rate, `1.0` is normal.
    pub rate: f32,
    /// Relative pitch, `1.0` is normal.
    pub pitch: f32,
}

impl VoiceOutput {
    /// Silent, slightly slower than normal speech.
    pub const DEFAULT: Self = Self {
        enabled: false,
        rate: 0.8,
        pitch: 1.0,
    };
}

impl Default for VoiceOutput {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// In-memory conversation with the assistant.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    /// Ordered log; only appended to.
    messages: Vec<ChatMessage>,
    /// Id given to the next message.
    next_id: u64,
    /// Replies scheduled but not yet applied.
    pending_replies: usize,
    /// Pending input line (typed or dictated).
    pub input: String,
    /// A recognition session is active.
    listening: bool,
    /// Speech output preferences.
    pub voice: VoiceOutput,
    /// Simulated processing time before each reply.
    reply_delay: Duration,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ConversationSession {
    /// Empty session replying after `reply_delay`.
    #[must_use]
    pub const fn new(reply_delay: Duration) -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
            pending_replies: 0,
            input: String::new(),
            listening: false,
            voice: VoiceOutput::DEFAULT,
            reply_delay,
        }
    }

    /// The log, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Configured reply delay.
    #[must_use]
    pub const fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Whether any reply is still pending (typing indicator).
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending_replies > 0
    }

    /// Whether voice input is active.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.listening
    }

    /// What: Append a message to the end of the log.
    ///
    /// Inputs:
    /// - `role`: Author
    /// - `body`: Text
    /// - `category`: Routing category for assistant messages
    ///
    /// Output:
    /// - The stored message with its assigned id and timestamp
    pub fn append(
        &mut self,
        role: Role,
        body: impl Into<String>,
        category: Option<IntentCategory>,
    ) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            body: body.into(),
            created_at: Local::now(),
            category,
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Append the assistant greeting if the log is still empty.
    pub fn ensure_welcome(&mut self) {
        if self.messages.is_empty() {
            self.append(Role::Assistant, WELCOME_MESSAGE, Some(IntentCategory::General));
        }
    }

    /// What: Send a user message and schedule the assistant's reply.
    ///
    /// Inputs:
    /// - `text`: Message text
    /// - `reply_tx`: Channel the delayed reply is delivered on
    ///
    /// Output:
    /// - `false` (and nothing appended) when `text` is blank; `true` otherwise
    ///
    /// Details:
    /// - Appends the user message, clears the pending input and spawns a task
    ///   that sleeps the reply delay, routes the text and sends an `AssistantReply`
    /// - Overlapping sends are allowed; each reply completes independently
    /// - Must be called inside a `tokio` runtime
    pub fn send_user_message(
        &mut self,
        text: &str,
        reply_tx: &mpsc::UnboundedSender<AssistantReply>,
    ) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.append(Role::User, text, None);
        self.input.clear();
        self.pending_replies += 1;

        let owned = text.to_string();
        let delay = self.reply_delay;
        let tx = reply_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let (category, text) = assistant::reply(&owned);
            tracing::debug!(category = %category, "assistant reply ready");
            let _ = tx.send(AssistantReply { category, text });
        });
        true
    }

    /// What: Append a delivered reply as an assistant message.
    ///
    /// Output:
    /// - The stored assistant message
    pub fn apply_reply(&mut self, reply: &AssistantReply) -> &ChatMessage {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.append(Role::Assistant, reply.text, Some(reply.category))
    }

    /// What: Speak a reply when voice output is enabled.
    ///
    /// Inputs:
    /// - `synthesizer`: Speech output capability
    /// - `text`: Reply as displayed
    /// - `locale`: Speech locale of the active language
    ///
    /// Output:
    /// - `true` if the text was submitted
    ///
    /// Details:
    /// - The synthesizer cancels any utterance in progress, so the latest reply wins
    pub fn speak_reply(
        &self,
        synthesizer: &dyn SpeechSynthesizer,
        text: &str,
        locale: &str,
    ) -> bool {
        if !self.voice.enabled {
            return false;
        }
        let spoken = strip_decorative_symbols(text);
        synthesizer.speak(&spoken, locale, self.voice.rate, self.voice.pitch);
        true
    }

    /// What: Start a single-shot voice recognition.
    ///
    /// Inputs:
    /// - `recognizer`: Speech input capability
    /// - `locale`: Speech locale of the active language
    /// - `events_tx`: Channel receiving exactly one `Transcript` or `Error`
    ///
    /// Output:
    /// - `Ok(true)` when a session started; `Ok(false)` when one is already active
    ///
    /// # Errors
    /// - `SpeechError::Unsupported` when the recognizer is unavailable
    ///
    /// Details:
    /// - Recognition blocks, so it runs on the blocking thread pool
    pub fn start_listening(
        &mut self,
        recognizer: Arc<dyn SpeechRecognizer>,
        locale: &str,
        events_tx: &mpsc::UnboundedSender<RecognitionEvent>,
    ) -> Result<bool, SpeechError> {
        if self.listening {
            return Ok(false);
        }
        if !recognizer.is_available() {
            return Err(SpeechError::Unsupported);
        }
        self.listening = true;
        let locale = locale.to_string();
        let tx = events_tx.clone();
        tokio::task::spawn_blocking(move || {
            let event = match recognizer.recognize(&locale) {
                Ok(transcript) => RecognitionEvent::Transcript(transcript),
                Err(e) => RecognitionEvent::Error(e),
            };
            let _ = tx.send(event);
        });
        Ok(true)
    }

    /// What: Apply a recognition event.
    ///
    /// Details:
    /// - A transcript replaces the pending input
    /// - Each session sends exactly one event, so every event ends listening
    pub fn apply_recognition(&mut self, event: RecognitionEvent) {
        match event {
            RecognitionEvent::Transcript(text) => {
                tracing::debug!(chars = text.chars().count(), "voice input recognized");
                self.input = text;
            }
            RecognitionEvent::Error(e) => {
                tracing::warn!(error = %e, "voice input failed");
            }
        }
        self.listening = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct ScriptedRecognizer(Result<String, SpeechError>);

    impl SpeechRecognizer for ScriptedRecognizer {
        fn is_available(&self) -> bool {
            true
        }
        fn recognize(&self, _locale: &str) -> Result<String, SpeechError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSynth(Mutex<Vec<String>>);

    impl SpeechSynthesizer for RecordingSynth {
        fn speak(&self, text: &str, _locale: &str, _rate: f32, _pitch: f32) {
            self.0.lock().expect("lock").push(text.to_string());
        }
        fn cancel_all(&self) {}
    }

    #[test]
    fn blank_message_is_ignored() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut session = ConversationSession::default();
        assert!(!session.send_user_message("   \n\t", &tx));
        assert!(session.messages().is_empty());
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_delay_with_category() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ConversationSession::default();
        session.input = "snake bite".to_string();
        assert!(session.send_user_message("I was bitten by a snake, medical help?", &tx));
        assert!(session.input.is_empty());
        assert!(session.is_loading());
        assert_eq!(session.messages().len(), 1);

        let reply = rx.recv().await.expect("reply");
        assert_eq!(reply.category, IntentCategory::Medical);
        let msg = session.apply_reply(&reply).clone();
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.category, Some(IntentCategory::Medical));
        assert!(msg.body.contains("Snake bite"));
        assert!(!session.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_sends_each_get_a_reply() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ConversationSession::default();
        session.send_user_message("police", &tx);
        session.send_user_message("flood", &tx);
        let first = rx.recv().await.expect("first");
        let second = rx.recv().await.expect("second");
        session.apply_reply(&first);
        assert!(session.is_loading());
        session.apply_reply(&second);
        assert!(!session.is_loading());
        let ids: Vec<u64> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn welcome_is_added_once() {
        let mut session = ConversationSession::default();
        session.ensure_welcome();
        session.ensure_welcome();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].body, WELCOME_MESSAGE);
        assert_eq!(session.messages()[0].category, Some(IntentCategory::General));
    }

    #[test]
    fn speech_output_respects_toggle_and_strips_symbols() {
        let synth = RecordingSynth::default();
        let mut session = ConversationSession::default();
        assert!(!session.speak_reply(&synth, "🔥 **Fire**", "en-IN"));
        session.voice.enabled = true;
        assert!(session.speak_reply(&synth, "🔥 **Fire**", "en-IN"));
        assert_eq!(*synth.0.lock().expect("lock"), vec!["Fire".to_string()]);
    }

    #[tokio::test]
    async fn recognition_delivers_a_single_transcript() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ConversationSession::default();
        let rec: Arc<dyn SpeechRecognizer> =
            Arc::new(ScriptedRecognizer(Ok("fire in building".to_string())));
        assert_eq!(session.start_listening(rec.clone(), "en-IN", &tx), Ok(true));
        assert!(session.is_listening());
        assert_eq!(session.start_listening(rec, "en-IN", &tx), Ok(false));

        let first = rx.recv().await.expect("transcript");
        assert_eq!(
            first,
            RecognitionEvent::Transcript("fire in building".to_string())
        );
        session.apply_recognition(first);
        assert_eq!(session.input, "fire in building");
        assert!(!session.is_listening());
        drop(tx);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn finished_session_cannot_end_the_next_one() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ConversationSession::default();
        let rec: Arc<dyn SpeechRecognizer> =
            Arc::new(ScriptedRecognizer(Ok("accident".to_string())));

        assert_eq!(session.start_listening(rec.clone(), "en-IN", &tx), Ok(true));
        let first = rx.recv().await.expect("first transcript");
        session.apply_recognition(first);
        assert!(!session.is_listening());

        assert_eq!(session.start_listening(rec.clone(), "en-IN", &tx), Ok(true));
        assert!(session.is_listening());
        assert_eq!(session.start_listening(rec, "en-IN", &tx), Ok(false));

        let second = rx.recv().await.expect("second transcript");
        session.apply_recognition(second);
        assert!(!session.is_listening());
        drop(tx);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn recognition_error_leaves_input_untouched() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut session = ConversationSession::default();
        session.input = "typed".to_string();
        let rec: Arc<dyn SpeechRecognizer> = Arc::new(ScriptedRecognizer(Err(
            SpeechError::Recognition("no-speech".to_string()),
        )));
        session.start_listening(rec, "hi-IN", &tx).expect("starts");
        let ev = rx.recv().await.expect("error event");
        assert!(matches!(ev, RecognitionEvent::Error(_)));
        session.apply_recognition(ev);
        assert_eq!(session.input, "typed");
        assert!(!session.is_listening());
    }

    #[test]
    fn unavailable_recognizer_is_unsupported() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut session = ConversationSession::default();
        let rec: Arc<dyn SpeechRecognizer> = Arc::new(crate::platform::UnavailableRecognizer);
        assert_eq!(
            session.start_listening(rec, "en-IN", &tx),
            Err(SpeechError::Unsupported)
        );
        assert!(!session.is_listening());
    }
}
