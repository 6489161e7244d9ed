//! Implementation methods for `AppState`.

use std::time::{Duration, Instant};

use crate::i18n::{self, LanguageCode};
use crate::location::LocationSelection;
use crate::session::{ConversationSession, VoiceOutput};
use crate::state::app_state::{AppState, TOAST_DURATION};
use crate::state::types::{DashboardItem, Route};
use crate::theme::Settings;

impl AppState {
    /// What: Apply loaded settings to the state.
    ///
    /// Inputs:
    /// - `settings`: Parsed and normalized `settings.conf`
    ///
    /// Details:
    /// - Replaces the session with one using the configured reply delay and voice preferences.
    /// - Must run before any message is sent; the chat log starts empty.
    pub fn apply_settings(&mut self, settings: Settings) {
        let mut session = ConversationSession::new(Duration::from_millis(settings.reply_delay_ms));
        session.voice = VoiceOutput {
            enabled: settings.voice_output,
            rate: settings.speech_rate,
            pitch: settings.speech_pitch,
        };
        self.session = session;
        self.settings = settings;
    }

    /// Show a toast for [`TOAST_DURATION`].
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_expires_at = Some(Instant::now() + TOAST_DURATION);
    }

    /// What: Hide the toast once its deadline has passed.
    ///
    /// Output:
    /// - `true` when a toast was removed (a redraw is useful)
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast_expires_at.is_some_and(|deadline| now >= deadline) {
            self.toast_message = None;
            self.toast_expires_at = None;
            return true;
        }
        false
    }

    /// What: Switch the display language.
    ///
    /// Details:
    /// - Only the language changes; route, chat log, location and selections stay as they are.
    pub fn set_language(&mut self, language: LanguageCode) {
        if self.language == language {
            return;
        }
        tracing::info!(from = %self.language, to = %language, "language changed");
        self.language = language;
        if self.persist_settings {
            crate::theme::save_language(language.code());
        }
    }

    /// Step to the next supported language.
    pub fn cycle_language(&mut self) -> LanguageCode {
        let next = self.language.next();
        self.set_language(next);
        next
    }

    /// What: Toggle speaking assistant replies.
    ///
    /// Output:
    /// - The new state
    ///
    /// Details:
    /// - Turning voice off silences any utterance in progress.
    pub fn toggle_voice_output(&mut self) -> bool {
        let enabled = !self.session.voice.enabled;
        self.session.voice.enabled = enabled;
        if !enabled {
            self.capabilities.synthesizer.cancel_all();
        }
        if self.persist_settings {
            crate::theme::save_voice_output(enabled);
        }
        enabled
    }

    /// Translated text of the location line.
    #[must_use]
    pub fn location_label(&self) -> String {
        if self.location.in_flight() {
            return i18n::t(self, "location.locating");
        }
        match self.location.selection() {
            LocationSelection::Unset => i18n::t(self, "location.unset"),
            other => other.to_string(),
        }
    }

    /// Focused dashboard entry.
    #[must_use]
    pub fn dashboard_item(&self) -> DashboardItem {
        DashboardItem::ALL[self.dashboard_selected.min(DashboardItem::ALL.len() - 1)]
    }

    /// Move the dashboard focus by `delta`, wrapping around.
    pub fn move_dashboard_selection(&mut self, delta: isize) {
        let len = DashboardItem::ALL.len();
        self.dashboard_selected = wrap_index(self.dashboard_selected, delta, len);
    }

    /// Whether the current route is the assistant page.
    #[must_use]
    pub const fn on_assistant(&self) -> bool {
        matches!(self.route, Route::Assistant)
    }
}

/// Add `delta` to `current` modulo `len` (`len` must be non-zero).
pub(crate) const fn wrap_index(current: usize, delta: isize, len: usize) -> usize {
    let len_i = len.cast_signed();
    let cur = (current % len).cast_signed();
    (cur + delta % len_i + len_i).cast_unsigned() % len
}
