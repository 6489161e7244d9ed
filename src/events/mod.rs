//! Event handling layer for Suraksha's TUI.
//!
//! `handle_event` applies one terminal event to the [`AppState`]: modals
//! first, then the global key map, then the active page. Work that has to
//! wait (assistant replies, voice input, geolocation) is started here and
//! reported back to the event loop through the [`Outbox`] channels.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::state::{AppState, Route};

mod global;
mod modals;
mod navigation;
mod outbox;
mod pages;

pub use navigation::{navigate, request_location, send_message, start_voice_input};
pub use outbox::{GeoResult, Inbox, Outbox, outbox_pair};

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, outbox: &Outbox) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if app.modal.is_open() {
                modals::handle_modal_key(ke, app);
                return false;
            }
            if let Some(exit) = global::handle_global_key(ke, app, outbox) {
                return exit;
            }
            match app.route {
                Route::Landing | Route::Dashboard => pages::handle_dashboard_key(ke, app, outbox),
                Route::Emergency => pages::handle_emergency_key(ke, app),
                Route::Assistant => pages::handle_assistant_key(ke, app, outbox),
                Route::NotFound(_) => pages::handle_not_found_key(ke, app, outbox),
            }
            false
        }
        CEvent::Paste(text) => {
            if app.on_assistant() && !app.modal.is_open() {
                app.quick_response_selected = None;
                app.session.input.push_str(text.trim_end_matches(['\r', '\n']));
            }
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests;
