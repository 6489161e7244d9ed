//! Channels through which event handlers hand work to background tasks.

use tokio::sync::mpsc;

use crate::platform::GeoError;
use crate::session::{AssistantReply, RecognitionEvent};

/// Result of a device position request.
pub type GeoResult = Result<(f64, f64), GeoError>;

/// Sending halves used by event handlers to start background work.
#[derive(Debug, Clone)]
pub struct Outbox {
    /// Delayed assistant replies.
    pub reply_tx: mpsc::UnboundedSender<AssistantReply>,
    /// Voice input results.
    pub recognition_tx: mpsc::UnboundedSender<RecognitionEvent>,
    /// Device position results.
    pub geo_tx: mpsc::UnboundedSender<GeoResult>,
}

/// Receiving halves drained by the event loop.
#[derive(Debug)]
pub struct Inbox {
    /// Delayed assistant replies.
    pub reply_rx: mpsc::UnboundedReceiver<AssistantReply>,
    /// Voice input results.
    pub recognition_rx: mpsc::UnboundedReceiver<RecognitionEvent>,
    /// Device position results.
    pub geo_rx: mpsc::UnboundedReceiver<GeoResult>,
}

/// Create connected [`Outbox`]/[`Inbox`] halves.
#[must_use]
pub fn outbox_pair() -> (Outbox, Inbox) {
    let (reply_tx, reply_rx) = mpsc::unbounded_channel();
    let (recognition_tx, recognition_rx) = mpsc::unbounded_channel();
    let (geo_tx, geo_rx) = mpsc::unbounded_channel();
    (
        Outbox {
            reply_tx,
            recognition_tx,
            geo_tx,
        },
        Inbox {
            reply_rx,
            recognition_rx,
            geo_rx,
        },
    )
}
