//! Global shortcuts available on every page.

use crossterm::event::KeyEvent;

use crate::i18n;
use crate::state::{AppState, Modal, NavPayload, Route};
use crate::theme::KeyMap;

use super::Outbox;
use super::navigation::{navigate, request_location, start_voice_input};

/// What: Handle a key bound in the configurable key map.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Mutable application state
/// - `outbox`: Channels for background work
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when the key was consumed, `None` when it is not global
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState, outbox: &Outbox) -> Option<bool> {
    let km = &app.settings.keymap;
    let hit = |bindings: &[crate::theme::KeyChord]| KeyMap::hit(bindings, ke.code, ke.modifiers);

    if hit(&km.exit) {
        return Some(true);
    }
    if hit(&km.help) {
        app.modal = Modal::Help;
    } else if hit(&km.next_page) {
        let next = app.route.cycle(true);
        navigate(app, next, NavPayload::None, outbox);
    } else if hit(&km.prev_page) {
        let prev = app.route.cycle(false);
        navigate(app, prev, NavPayload::None, outbox);
    } else if hit(&km.cycle_language) {
        let lang = app.cycle_language();
        let msg = i18n::t_fmt1(app, "app.language_changed", lang.native_name());
        app.show_toast(msg);
    } else if hit(&km.toggle_voice_output) {
        let key = if app.toggle_voice_output() {
            "assistant.voice_on"
        } else {
            "assistant.voice_off"
        };
        let msg = i18n::t(app, key);
        app.show_toast(msg);
    } else if hit(&km.voice_input) {
        if app.on_assistant() {
            start_voice_input(app, outbox);
        } else {
            navigate(app, Route::Assistant, NavPayload::VoiceMode, outbox);
        }
    } else if hit(&km.use_location) {
        request_location(app, outbox);
    } else if hit(&km.next_place) {
        let place = app.location.next_place();
        let msg = i18n::t_fmt1(app, "location.set", place);
        app.show_toast(msg);
    } else if hit(&km.toggle_headlines) {
        app.headlines_expanded = !app.headlines_expanded;
    } else {
        return None;
    }
    Some(false)
}
