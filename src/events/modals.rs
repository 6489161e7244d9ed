//! Key handling while a modal is open.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};
use crate::theme::KeyMap;

/// What: Route a key to the open modal.
///
/// Details:
/// - Alerts close on Enter/Esc; help also closes on its own key.
/// - Every other key is swallowed so pages never react behind a modal.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    let close = match &app.modal {
        Modal::None => false,
        Modal::Alert { .. } => matches!(ke.code, KeyCode::Enter | KeyCode::Esc),
        Modal::Help => {
            matches!(ke.code, KeyCode::Enter | KeyCode::Esc)
                || KeyMap::hit(&app.settings.keymap.help, ke.code, ke.modifiers)
        }
    };
    if close {
        app.modal = Modal::None;
    }
}
