//! Central `AppState` container.

use ratatui::widgets::ListState;
use std::time::Instant;

use crate::i18n::{LanguageCode, TranslationTable};
use crate::location::LocationContext;
use crate::platform::Capabilities;
use crate::session::ConversationSession;
use crate::state::modal::Modal;
use crate::state::types::Route;
use crate::theme::Settings;

mod default_impl;
mod methods;

pub(crate) use methods::wrap_index;

/// How long a toast stays visible.
pub const TOAST_DURATION: std::time::Duration = std::time::Duration::from_secs(3);

/// Global application state shared by the event, runtime, and UI layers.
///
/// Owned by the event loop, which is its only writer. Background tasks report
/// through channels and never touch it directly. Nothing here is persisted
/// except the language and voice output toggles written back to `settings.conf`.
#[derive(Debug)]
pub struct AppState {
    /// Page currently shown.
    pub route: Route,
    /// Active display language.
    pub language: LanguageCode,
    /// All locale dictionaries.
    pub translations: TranslationTable,
    /// Selected place or device position.
    pub location: LocationContext,
    /// Chat log and voice state of the assistant page.
    pub session: ConversationSession,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Focused entry on the dashboard (index into `DashboardItem::ALL`).
    pub dashboard_selected: usize,
    /// Selection in the emergency contacts list.
    pub contacts_state: ListState,
    /// Highlighted quick response chip on the assistant page.
    pub quick_response_selected: Option<usize>,
    /// Headlines panel shows all entries.
    pub headlines_expanded: bool,
    /// Last connectivity probe result; assumed online until a probe says otherwise.
    pub online: bool,
    /// Parsed settings, including the key map.
    pub settings: Settings,
    /// Host capabilities (geolocation, speech, telephony).
    pub capabilities: Capabilities,
    /// Persist language and voice toggles back to `settings.conf`.
    pub persist_settings: bool,
    /// Transient toast message (bottom-right).
    pub toast_message: Option<String>,
    /// Deadline (Instant) after which the toast is automatically hidden.
    pub toast_expires_at: Option<Instant>,
}

#[cfg(test)]
mod tests;
