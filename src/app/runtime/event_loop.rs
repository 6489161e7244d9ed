use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{
    handle_online_status, handle_position, handle_recognition, handle_reply, handle_tick,
};

/// What: Drive rendering and message handling until the user exits.
///
/// Inputs:
/// - `terminal`: Terminal to draw on; `None` in headless mode
/// - `app`: Application state
/// - `channels`: Runtime channels
///
/// Details:
/// - Redraws before waiting on the next message from any channel
/// - Returns when an exit key is pressed or every channel has closed
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, app, &channels.outbox) {
                    break;
                }
            }
            Some(reply) = channels.inbox.reply_rx.recv() => {
                handle_reply(app, &reply);
            }
            Some(event) = channels.inbox.recognition_rx.recv() => {
                handle_recognition(app, event);
            }
            Some(result) = channels.inbox.geo_rx.recv() => {
                handle_position(app, result);
            }
            Some(online) = channels.online_rx.recv() => {
                handle_online_status(app, online);
            }
            Some(()) = channels.tick_rx.recv() => {
                handle_tick(app);
            }
            else => break,
        }
    }
}
