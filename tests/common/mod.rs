//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use country_picker::config::Config;
use country_picker::country::{CountryCode, CountryRecord};
use country_picker::lookup::{CountryLookup, LookupError};
use country_picker::ui::app::{App, UiCommand};
use country_picker::ui::events::AppEvent;
use country_picker::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::collections::HashMap;
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Default config pointed at `base_url` with short timeouts.
pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = 2;
    config.api.connect_timeout_seconds = 1;
    config
}

// -- App helpers --------------------------------------------------------------

/// App wired to a plain channel so tests can inspect issued commands.
pub fn make_app(config: &Config) -> (App, tokio::sync::mpsc::Receiver<UiCommand>) {
    let (tx, rx) = tokio::sync::mpsc::channel(16);
    let mut app = App::new(config);
    app.set_command_sender(tx);
    (app, rx)
}

/// Render the whole screen into a string, one terminal row per line.
pub fn render_screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Wait for the next lookup result and feed it to the app.
pub fn pump_fetch(app: &mut App, events: &mpsc::Receiver<AppEvent>, timeout: Duration) {
    match events.recv_timeout(timeout) {
        Ok(AppEvent::FetchCompleted {
            code,
            generation,
            result,
        }) => app.on_fetch_completed(code, generation, result),
        Ok(_) => panic!("unexpected non-fetch event"),
        Err(err) => panic!("no lookup result within {:?}: {}", timeout, err),
    }
}

// -- Lookup stub --------------------------------------------------------------

/// In-memory lookup with per-country results and delays.
#[derive(Default)]
pub struct StubLookup {
    results: Mutex<HashMap<CountryCode, Result<CountryRecord, LookupError>>>,
    delays: Mutex<HashMap<CountryCode, Duration>>,
    calls: AtomicUsize,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(
        self,
        code: CountryCode,
        result: Result<CountryRecord, LookupError>,
    ) -> Self {
        self.results.lock().unwrap().insert(code, result);
        self
    }

    pub fn with_delay(self, code: CountryCode, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(code, delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryLookup for StubLookup {
    async fn lookup(&self, code: CountryCode) -> Result<CountryRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().unwrap().get(&code).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let result = self.results.lock().unwrap().get(&code).cloned();
        result.unwrap_or_else(|| {
            Err(LookupError::Status {
                url: format!("stub://alpha/{}", code),
                status: 404,
            })
        })
    }
}
