use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::country::{CountryCode, CountryRecord};
use crate::lookup::LookupError;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Input(KeyEvent),
    Resize(u16, u16),
    /// A lookup finished. Tagged with the generation it was issued under.
    FetchCompleted {
        code: CountryCode,
        generation: u64,
        result: Result<CountryRecord, LookupError>,
    },
    /// The terminal input thread stopped after a read error.
    InputClosed,
}

/// Single queue feeding the UI loop: terminal input from a reader thread,
/// lookup results from the fetch worker.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let event_tx = tx.clone();
        let stop_flag = Arc::clone(&stop);

        let spawned = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || {
                while !stop_flag.load(Ordering::Relaxed) {
                    match event::poll(INPUT_POLL_INTERVAL) {
                        Ok(true) => {}
                        Ok(false) => continue,
                        Err(err) => {
                            tracing::error!("Terminal poll failed: {}", err);
                            let _ = event_tx.send(AppEvent::InputClosed);
                            break;
                        }
                    }

                    let forwarded = match event::read() {
                        Ok(Event::Key(key)) => event_tx.send(AppEvent::Input(key)),
                        Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                        Ok(_) => Ok(()),
                        Err(err) => {
                            tracing::error!("Terminal read failed: {}", err);
                            let _ = event_tx.send(AppEvent::InputClosed);
                            break;
                        }
                    };
                    if forwarded.is_err() {
                        break;
                    }
                }
            });
        if let Err(err) = spawned {
            tracing::error!("Failed to spawn input thread: {}", err);
        }

        Self { rx, tx, stop }
    }

    /// Next event, or `None` if nothing arrived within `timeout`.
    ///
    /// The handler owns a sender, so the queue never disconnects while it lives.
    pub fn next(&self, timeout: Duration) -> Option<AppEvent> {
        self.rx.recv_timeout(timeout).ok()
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
