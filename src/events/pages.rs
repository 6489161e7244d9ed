//! Page-specific key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::assistant::QUICK_RESPONSES;
use crate::contacts;
use crate::i18n;
use crate::state::app_state::wrap_index;
use crate::state::{AppState, DashboardItem, NavPayload, Route};

use super::Outbox;
use super::navigation::{navigate, send_message};

/// Dashboard: arrows move the focus, Enter activates the focused entry.
pub(super) fn handle_dashboard_key(ke: KeyEvent, app: &mut AppState, outbox: &Outbox) {
    match ke.code {
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => app.move_dashboard_selection(-1),
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => app.move_dashboard_selection(1),
        KeyCode::Enter => activate_dashboard_item(app, outbox),
        _ => {}
    }
}

/// What: Perform the focused dashboard action.
///
/// Details:
/// - Quick actions open the assistant with their translated prompt, so the
///   question is asked in the active language.
fn activate_dashboard_item(app: &mut AppState, outbox: &Outbox) {
    match app.dashboard_item() {
        DashboardItem::Quick(action) => {
            let prompt = i18n::t(app, &action.prompt_key());
            navigate(app, Route::Assistant, NavPayload::Prompt(prompt), outbox);
        }
        DashboardItem::VoiceAssistant => {
            navigate(app, Route::Assistant, NavPayload::VoiceMode, outbox);
        }
        DashboardItem::StartChat => navigate(app, Route::Assistant, NavPayload::None, outbox),
        DashboardItem::EmergencyContacts => {
            navigate(app, Route::Emergency, NavPayload::None, outbox);
        }
    }
}

/// Emergency contacts: arrows select a service, Enter dials it, `c` calls 112.
pub(super) fn handle_emergency_key(ke: KeyEvent, app: &mut AppState) {
    let len = contacts::contacts().len();
    let current = app.contacts_state.selected().unwrap_or(0);
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.contacts_state.select(Some(wrap_index(current, -1, len)));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.contacts_state.select(Some(wrap_index(current, 1, len)));
        }
        KeyCode::Home => app.contacts_state.select(Some(0)),
        KeyCode::End => app.contacts_state.select(Some(len - 1)),
        KeyCode::Enter => {
            if let Some(contact) = contacts::contacts().get(current) {
                dial_with_toast(app, contact);
            }
        }
        KeyCode::Char('c' | 'C')
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            dial_with_toast(app, contacts::national());
        }
        _ => {}
    }
}

/// Dial `contact` and confirm it in a toast.
fn dial_with_toast(app: &mut AppState, contact: &contacts::EmergencyContact) {
    contacts::dial(contact, app.capabilities.dialer.as_ref());
    let msg = i18n::t_fmt1(app, "contacts.dialing", contact.number);
    app.show_toast(msg);
}

/// What: Assistant page: edit the input line, pick quick responses, send.
///
/// Details:
/// - Up/Down highlight a quick response chip; Enter sends the chip when one is
///   highlighted, otherwise the typed input.
/// - Typing clears the chip highlight; Esc clears the highlight, then the input.
pub(super) fn handle_assistant_key(ke: KeyEvent, app: &mut AppState, outbox: &Outbox) {
    let len = QUICK_RESPONSES.len();
    match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.quick_response_selected = None;
            app.session.input.push(ch);
        }
        KeyCode::Backspace => {
            app.session.input.pop();
        }
        KeyCode::Up => {
            app.quick_response_selected = Some(
                app.quick_response_selected
                    .map_or(len - 1, |i| wrap_index(i, -1, len)),
            );
        }
        KeyCode::Down => {
            app.quick_response_selected = Some(
                app.quick_response_selected
                    .map_or(0, |i| wrap_index(i, 1, len)),
            );
        }
        KeyCode::Esc => {
            if app.quick_response_selected.take().is_none() {
                app.session.input.clear();
            }
        }
        KeyCode::Enter => {
            let text = match app.quick_response_selected {
                Some(i) => QUICK_RESPONSES[i % len].to_string(),
                None => app.session.input.clone(),
            };
            send_message(app, &text, outbox);
        }
        _ => {}
    }
}

/// Not-found page: Enter or Esc returns to the dashboard.
pub(super) fn handle_not_found_key(ke: KeyEvent, app: &mut AppState, outbox: &Outbox) {
    if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
        navigate(app, Route::Dashboard, NavPayload::None, outbox);
    }
}
