//! Application state: the single mutable context owned by the event loop.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{DashboardItem, NavPayload, QuickAction, Route};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/emergency/"), Route::Emergency);
        assert_eq!(Route::from_path("/ai-assistant"), Route::Assistant);
        assert_eq!(Route::from_path(Route::Assistant.path()), Route::Assistant);
        assert_eq!(
            Route::from_path("/assistant"),
            Route::NotFound("/assistant".to_string())
        );
        assert_eq!(
            Route::from_path("/missing"),
            Route::NotFound("/missing".to_string())
        );
        assert_eq!(Route::from_path("/missing").path(), "/missing");
    }

    #[test]
    fn navbar_cycles_wrap_around() {
        assert_eq!(Route::Assistant.cycle(true), Route::Dashboard);
        assert_eq!(Route::Dashboard.cycle(false), Route::Assistant);
        assert_eq!(Route::NotFound("/x".into()).cycle(true), Route::Dashboard);
    }

    #[test]
    fn quick_actions_point_at_translation_keys() {
        assert_eq!(QuickAction::Medical.prompt_key(), "dashboard.quick.medical.prompt");
        assert_eq!(QuickAction::Fire.title_key(), "dashboard.quick.fire.title");
    }
}
