use crate::config::Config;
use crate::lookup::CountryLookup;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch_worker::spawn_fetch_worker;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

const EVENT_TIMEOUT: Duration = Duration::from_millis(250);

/// Run the terminal UI until the user quits.
///
/// Lookups execute on `runtime`; everything else happens on the calling thread.
pub fn run(config: &Config, lookup: Arc<dyn CountryLookup>, runtime: &Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new();
    let mut app = App::new(config);
    app.set_command_sender(spawn_fetch_worker(runtime, lookup, events.sender()));

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        if let Some(event) = events.next(EVENT_TIMEOUT) {
            if dispatch_event(&mut app, event).is_break() {
                break;
            }
        }
    }

    tracing::info!("UI loop finished");
    drop(guard);
    Ok(())
}

/// Apply one queued event. Breaks when the loop cannot continue.
fn dispatch_event(app: &mut App, event: AppEvent) -> ControlFlow<()> {
    match event {
        AppEvent::Input(key) => handle_key(app, key),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::FetchCompleted {
            code,
            generation,
            result,
        } => app.on_fetch_completed(code, generation, result),
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, leaving UI loop");
            return ControlFlow::Break(());
        }
    }
    ControlFlow::Continue(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::{CountryCode, CountryRecord};
    use crate::ui::app::UiCommand;
    use serde_json::json;

    #[test]
    fn input_closed_stops_the_loop() {
        let mut app = App::new(&Config::default());
        assert!(dispatch_event(&mut app, AppEvent::InputClosed).is_break());
    }

    #[test]
    fn fetch_result_is_applied_and_loop_continues() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(4);
        let mut app = App::new(&Config::default());
        app.set_command_sender(tx);
        app.start();
        let UiCommand::Fetch(ticket) = rx.try_recv().expect("fetch issued");

        let flow = dispatch_event(
            &mut app,
            AppEvent::FetchCompleted {
                code: ticket.code,
                generation: ticket.generation,
                result: Ok(CountryRecord::new(json!({"name": "Canada"}))),
            },
        );

        assert!(flow.is_continue());
        assert_eq!(ticket.code, CountryCode::Ca);
        assert!(app.fetch_state().record().is_some());
    }

    #[test]
    fn resize_is_recorded() {
        let mut app = App::new(&Config::default());
        assert!(dispatch_event(&mut app, AppEvent::Resize(80, 10)).is_continue());
        assert_eq!(app.details_viewport_rows(), 2);
    }
}
