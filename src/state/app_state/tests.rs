//! Tests for `AppState`.

use std::time::{Duration, Instant};

use crate::i18n::{self, LanguageCode};
use crate::state::app_state::AppState;
use crate::state::types::{DashboardItem, QuickAction, Route};
use crate::theme::Settings;

#[test]
/// What: Verify `AppState::default` starts in English on the dashboard with nothing selected.
fn app_state_default_is_english_dashboard() {
    let app = AppState::default();
    assert_eq!(app.language, LanguageCode::En);
    assert_eq!(app.route, Route::Dashboard);
    assert!(app.session.messages().is_empty());
    assert!(!app.location.selection().is_set());
    assert_eq!(app.location_label(), "Select your city");
    assert!(!app.persist_settings);
}

#[test]
/// What: Switching `hi` then `ta` changes only the language and the resolved strings.
fn language_switch_keeps_other_state() {
    let mut app = AppState::default();
    app.route = Route::Emergency;
    app.location.select_named("Chennai, Tamil Nadu");
    app.session.input = "draft".into();

    app.set_language(LanguageCode::Hi);
    let hindi = i18n::t(&app, "app.title");
    app.set_language(LanguageCode::Ta);
    let tamil = i18n::t(&app, "app.title");

    assert_ne!(hindi, tamil);
    assert_eq!(tamil, app.translations.resolve("app.title", LanguageCode::Ta));
    assert_eq!(app.route, Route::Emergency);
    assert_eq!(app.location_label(), "Chennai, Tamil Nadu");
    assert_eq!(app.session.input, "draft");
}

#[test]
fn apply_settings_configures_session() {
    let mut app = AppState::default();
    app.apply_settings(Settings {
        reply_delay_ms: 200,
        voice_output: true,
        speech_rate: 1.2,
        ..Settings::default()
    });
    assert_eq!(app.session.reply_delay(), Duration::from_millis(200));
    assert!(app.session.voice.enabled);
    assert!((app.session.voice.rate - 1.2).abs() < f32::EPSILON);
    assert!(!app.toggle_voice_output());
}

#[test]
fn toast_expires_after_deadline() {
    let mut app = AppState::default();
    app.show_toast("hello");
    assert!(!app.expire_toast(Instant::now()));
    assert!(app.expire_toast(Instant::now() + Duration::from_secs(10)));
    assert!(app.toast_message.is_none());
}

#[test]
fn dashboard_selection_wraps() {
    let mut app = AppState::default();
    app.move_dashboard_selection(-1);
    assert_eq!(app.dashboard_item(), DashboardItem::EmergencyContacts);
    app.move_dashboard_selection(1);
    assert_eq!(app.dashboard_item(), DashboardItem::Quick(QuickAction::Fire));
    assert_eq!(super::methods::wrap_index(2, -9, 7), 0);
}
