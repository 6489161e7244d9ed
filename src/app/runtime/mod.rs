use ratatui::{Terminal, backend::CrosstermBackend};

use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod cleanup;
mod event_loop;
mod handlers;
mod init;
mod workers;

use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::initialize_app_state;
use workers::auxiliary::{spawn_auxiliary_workers, spawn_event_thread};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that runs the app without a terminal (tests, CI).
pub const HEADLESS_ENV: &str = "SURAKSHA_TEST_HEADLESS";

/// Startup options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Language code or name overriding `settings.conf` and the system locale.
    pub language: Option<String>,
    /// Initial page path such as `/ai-assistant`; unknown paths show the not-found page.
    pub route: Option<String>,
    /// Force speaking replies for this session.
    pub voice_output: bool,
}

/// What: Run the Suraksha TUI end-to-end.
///
/// Inputs:
/// - `opts`: Command-line overrides
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Config/state: Loads settings, translations and platform capabilities.
/// - Background tasks: Tick and connectivity workers plus the terminal input thread;
///   replies, voice input and geolocation are spawned on demand by event handlers.
/// - Cleanup: Stops the input thread, silences speech and restores the terminal.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    let mut channels = Channels::new();

    let probe_url = initialize_app_state(&mut app, &opts, headless, &channels.outbox);

    spawn_auxiliary_workers(headless, probe_url, &channels.tick_tx, &channels.online_tx);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    cleanup_on_exit(&app, &channels);

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
