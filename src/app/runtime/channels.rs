use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::events::{Inbox, Outbox, outbox_pair};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - One unbounded channel per concern between the event loop and its workers
/// - `outbox` is handed to event handlers; `inbox` is drained by the loop
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events for the loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the input thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Periodic ticks (toast expiry, redraws).
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Ticks for the loop.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Connectivity probe results.
    pub online_tx: mpsc::UnboundedSender<bool>,
    /// Connectivity for the loop.
    pub online_rx: mpsc::UnboundedReceiver<bool>,
    /// Senders for replies, recognition and geolocation.
    pub outbox: Outbox,
    /// Receivers for replies, recognition and geolocation.
    pub inbox: Inbox,
}

impl Channels {
    /// Create every channel used by the runtime.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (online_tx, online_rx) = mpsc::unbounded_channel();
        let (outbox, inbox) = outbox_pair();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
            online_tx,
            online_rx,
            outbox,
            inbox,
        }
    }
}
