use crate::events::{Outbox, navigate};
use crate::i18n::{self, resolve_startup_language};
use crate::platform::{Capabilities, DEFAULT_GEOLOCATION_URL};
use crate::state::{AppState, NavPayload, Route};
use crate::theme::{self, GeolocationMode};

use super::RunOptions;

/// What: Initialize application state from settings, translations and CLI options.
///
/// Inputs:
/// - `app`: Application state to initialize
/// - `opts`: Command-line overrides
/// - `headless`: When `true`, skip writes to the config directory and host capabilities
/// - `outbox`: Channels for work started by the initial route
///
/// Output:
/// - Endpoint for the connectivity worker, when the IP geolocation service is in use
///
/// Details:
/// - Startup language: `--language`, then `settings.conf`, then the system locale
/// - Locale files in the config `locales/` directory override the embedded ones
pub fn initialize_app_state(
    app: &mut AppState,
    opts: &RunOptions,
    headless: bool,
    outbox: &Outbox,
) -> Option<String> {
    let mut settings = theme::settings();
    if !headless {
        theme::ensure_settings_keys_present(&settings);
    }
    if opts.voice_output {
        settings.voice_output = true;
    }

    app.language = resolve_startup_language(opts.language.as_deref(), &settings.language);
    let locales = theme::locales_dir();
    app.translations = i18n::load_table(Some(locales.as_path()));
    app.capabilities = if headless {
        Capabilities::headless()
    } else {
        Capabilities::from_settings(&settings)
    };
    app.persist_settings = !headless;

    let probe_url = (settings.geolocation == GeolocationMode::Ip).then(|| {
        if settings.geolocation_url.trim().is_empty() {
            DEFAULT_GEOLOCATION_URL.to_string()
        } else {
            settings.geolocation_url.clone()
        }
    });
    tracing::info!(
        language = %app.language,
        voice_output = settings.voice_output,
        geolocation = settings.geolocation.as_config_key(),
        headless,
        "Suraksha initialized"
    );
    app.apply_settings(settings);

    if let Some(path) = opts.route.as_deref() {
        navigate(app, Route::from_path(path), NavPayload::None, outbox);
    }
    probe_url
}
