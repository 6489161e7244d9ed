//! Default implementation for `AppState`.

use ratatui::widgets::ListState;

use super::AppState;
use crate::i18n::{LanguageCode, load_table};
use crate::location::LocationContext;
use crate::platform::Capabilities;
use crate::session::ConversationSession;
use crate::state::modal::Modal;
use crate::state::types::Route;
use crate::theme::Settings;

impl Default for AppState {
    /// What: Construct an English, dashboard-first [`AppState`] that never touches the host.
    ///
    /// Details:
    /// - Uses the embedded locales only, headless capabilities, and default settings.
    /// - Settings persistence is off; the runtime enables it after loading `settings.conf`.
    fn default() -> Self {
        Self {
            route: Route::Dashboard,
            language: LanguageCode::DEFAULT,
            translations: load_table(None),
            location: LocationContext::default(),
            session: ConversationSession::default(),
            modal: Modal::None,
            dashboard_selected: 0,
            contacts_state: ListState::default().with_selected(Some(0)),
            quick_response_selected: None,
            headlines_expanded: false,
            online: true,
            settings: Settings::default(),
            capabilities: Capabilities::headless(),
            persist_settings: false,
            toast_message: None,
            toast_expires_at: None,
        }
    }
}
