//! Bridge between the synchronous UI loop and async lookups.
//!
//! The UI sends [`UiCommand`]s over a bounded tokio channel; the worker
//! runs each lookup in its own task and posts the result back as an
//! [`AppEvent::FetchCompleted`]. In-flight lookups are never cancelled.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;
use tokio::runtime::Handle;

use crate::lookup::CountryLookup;
use crate::ui::app::{UiCommand, UiCommandSender};
use crate::ui::events::AppEvent;

const COMMAND_CHANNEL_SIZE: usize = 32;

pub fn spawn_fetch_worker(
    runtime: &Handle,
    lookup: Arc<dyn CountryLookup>,
    events: mpsc::Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = tokio::sync::mpsc::channel(COMMAND_CHANNEL_SIZE);

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            match command {
                UiCommand::Fetch(ticket) => {
                    let lookup = Arc::clone(&lookup);
                    let events = events.clone();
                    tokio::spawn(async move {
                        let started = Instant::now();
                        let result = lookup.lookup(ticket.code).await;
                        tracing::debug!(
                            country = %ticket.code,
                            generation = ticket.generation,
                            ok = result.is_ok(),
                            elapsed_ms = started.elapsed().as_millis() as u64,
                            "Lookup finished"
                        );
                        let event = AppEvent::FetchCompleted {
                            code: ticket.code,
                            generation: ticket.generation,
                            result,
                        };
                        if events.send(event).is_err() {
                            tracing::trace!("Lookup result dropped (UI loop gone)");
                        }
                    });
                }
            }
        }
        tracing::debug!("Fetch worker stopped");
    });

    tx
}
