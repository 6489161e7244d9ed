use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};

use crate::platform::probe_connectivity;

/// What: Spawns tick worker that sends tick events every 200ms.
///
/// Details:
/// - Ticks expire toasts and redraw the listening/typing indicators
fn spawn_tick_worker(tick_tx: &mpsc::UnboundedSender<()>) {
    let tick_tx_bg = tick_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx_bg.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawns the connectivity worker behind the dashboard status line.
///
/// Inputs:
/// - `url`: Endpoint probed (the geolocation service)
/// - `online_tx`: Channel receiving each probe result
///
/// Details:
/// - Probes once at startup, then every 60 seconds
fn spawn_connectivity_worker(url: String, online_tx: &mpsc::UnboundedSender<bool>) {
    let tx = online_tx.clone();
    tokio::spawn(async move {
        loop {
            let online = probe_connectivity(&url).await;
            if tx.send(online).is_err() {
                break;
            }
            sleep(Duration::from_secs(60)).await;
        }
    });
}

/// What: Spawns the auxiliary workers.
///
/// Inputs:
/// - `headless`: When `true`, skip anything touching the network
/// - `probe_url`: Endpoint for the connectivity worker; `None` disables it
/// - `tick_tx`: Channel for tick events
/// - `online_tx`: Channel for connectivity results
pub fn spawn_auxiliary_workers(
    headless: bool,
    probe_url: Option<String>,
    tick_tx: &mpsc::UnboundedSender<()>,
    online_tx: &mpsc::UnboundedSender<bool>,
) {
    spawn_tick_worker(tick_tx);
    if headless {
        return;
    }
    if let Some(url) = probe_url {
        spawn_connectivity_worker(url, online_tx);
    }
}

/// What: Spawns event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `event_thread_cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Spawns a blocking thread that polls for terminal events
/// - Checks cancellation flag periodically to allow immediate exit
/// - Uses 50ms poll timeout to balance responsiveness and CPU usage
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => {
                    // Transient read errors are ignored.
                    if let Ok(ev) = crossterm::event::read() {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) | Err(_) => {}
            }
        }
    });
}
