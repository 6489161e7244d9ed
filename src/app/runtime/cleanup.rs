use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Release runtime resources before the terminal is restored.
///
/// Details:
/// - Signals the input thread to stop polling
/// - Cancels any utterance still being spoken
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    tracing::debug!("[Runtime] Main loop exited, cleaning up");
    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    app.capabilities.synthesizer.cancel_all();
}
