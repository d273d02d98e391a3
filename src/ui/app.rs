use crate::config::{Config, DetailsMode};
use crate::country::{CountryCode, CountryRecord};
use crate::lookup::LookupError;
use crate::query::{FetchState, FetchTicket, QueryCache, Resolution};
use crate::ui::details::{details_lines, DetailsIntent, DetailsReducer, DetailsState};
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::picker::{PickerIntent, PickerReducer, PickerState};
use crate::ui::selection::{SelectionIntent, SelectionReducer, SelectionState};
use ratatui::layout::Rect;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Fetch(FetchTicket),
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    mode: DetailsMode,
    /// Terminal size in cells.
    size: Option<(u16, u16)>,
    /// Selection State (MVI pattern). The only writer is `select_country`.
    selection: SelectionState,
    /// Dropdown state (MVI pattern).
    picker: PickerState,
    /// Details scroll state (MVI pattern).
    details: DetailsState,
    queries: QueryCache,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            mode: config.details.mode,
            size: None,
            selection: SelectionState::new(config.details.default_country),
            picker: PickerState::default(),
            details: DetailsState::default(),
            queries: QueryCache::new(Duration::from_secs(config.cache.stale_after_seconds)),
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> DetailsMode {
        self.mode
    }

    pub fn selected(&self) -> CountryCode {
        self.selection.country
    }

    pub fn picker(&self) -> &PickerState {
        &self.picker
    }

    pub fn details(&self) -> &DetailsState {
        &self.details
    }

    pub fn queries(&self) -> &QueryCache {
        &self.queries
    }

    /// Fetch state of the selected country.
    pub fn fetch_state(&self) -> &FetchState {
        self.queries.state(self.selection.country)
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// First render: request the default country.
    pub fn start(&mut self) {
        tracing::info!(
            country = %self.selection.country,
            mode = ?self.mode,
            "Details mounted"
        );
        self.ensure_fetch();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Setter of the Selection State. Always followed by a fetch check.
    pub fn select_country(&mut self, code: CountryCode) {
        let previous = self.selection.country;
        dispatch_mvi!(self, selection, SelectionReducer, SelectionIntent::Select(code));
        if previous != code {
            tracing::info!(from = %previous, to = %code, "Country selected");
            self.dispatch_details(DetailsIntent::Reset);
        }
        self.ensure_fetch();
    }

    /// Select by 1-based position in the picker. Out-of-range numbers are ignored.
    pub fn select_by_number(&mut self, number: usize) -> bool {
        let Some(code) = number.checked_sub(1).and_then(CountryCode::from_index) else {
            return false;
        };
        self.close_picker();
        self.select_country(code);
        true
    }

    /// Drop the cached result for the selected country and fetch it again.
    pub fn refresh(&mut self) {
        if self.mode == DetailsMode::Echo {
            return;
        }
        let code = self.selection.country;
        tracing::info!(country = %code, "Refresh requested");
        self.queries.invalidate(code);
        self.dispatch_details(DetailsIntent::Reset);
        self.ensure_fetch();
    }

    // ========================================================================
    // Picker (MVI pattern)
    // ========================================================================

    pub fn open_picker(&mut self) {
        let current = self.selection.country;
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Open { current });
    }

    pub fn close_picker(&mut self) {
        dispatch_mvi!(self, picker, PickerReducer, PickerIntent::Close);
    }

    pub fn move_picker(&mut self, direction: i32) {
        let intent = if direction.is_negative() {
            PickerIntent::MoveUp
        } else {
            PickerIntent::MoveDown
        };
        dispatch_mvi!(self, picker, PickerReducer, intent);
    }

    /// Commit the highlighted option, if the dropdown is open.
    pub fn commit_picker(&mut self) {
        let Some(code) = self.picker.highlighted_code() else {
            return;
        };
        self.close_picker();
        self.select_country(code);
    }

    // ========================================================================
    // Details (MVI pattern)
    // ========================================================================

    pub fn scroll_details_up(&mut self, lines: u16) {
        self.dispatch_details(DetailsIntent::ScrollUp { lines });
    }

    pub fn scroll_details_down(&mut self, lines: u16) {
        let max = self.max_details_scroll();
        self.dispatch_details(DetailsIntent::ScrollDown { lines, max });
    }

    /// Rows of the details pane inside its border.
    pub fn details_viewport_rows(&self) -> u16 {
        let Some((cols, rows)) = self.size else {
            return 1;
        };
        body_rect(Rect::new(0, 0, cols, rows))
            .height
            .saturating_sub(2)
            .max(1)
    }

    fn max_details_scroll(&self) -> u16 {
        let total = details_lines(self.selection.country, self.mode, self.fetch_state()).len();
        let total = u16::try_from(total).unwrap_or(u16::MAX);
        total.saturating_sub(self.details_viewport_rows())
    }

    fn dispatch_details(&mut self, intent: DetailsIntent) {
        dispatch_mvi!(self, details, DetailsReducer, intent);
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Called by the UI loop when the fetch worker reports back.
    pub fn on_fetch_completed(
        &mut self,
        code: CountryCode,
        generation: u64,
        result: Result<CountryRecord, LookupError>,
    ) {
        if let Err(err) = &result {
            tracing::warn!(
                country = %code,
                generation,
                kind = err.kind(),
                "Lookup failed: {}",
                err.details()
            );
        }

        match self.queries.resolve(code, generation, result, Instant::now()) {
            Resolution::Applied => {
                if code == self.selection.country {
                    self.dispatch_details(DetailsIntent::Reset);
                }
            }
            Resolution::Stale => {
                tracing::debug!(country = %code, generation, "Dropped superseded lookup result");
            }
        }
    }

    fn ensure_fetch(&mut self) {
        if self.mode == DetailsMode::Echo {
            return;
        }
        let code = self.selection.country;
        let Some(ticket) = self.queries.begin(code, Instant::now()) else {
            tracing::debug!(country = %code, "Lookup served from cache or already in flight");
            return;
        };

        tracing::debug!(country = %code, generation = ticket.generation, "Lookup issued");
        if let Err(message) = self.send_command(UiCommand::Fetch(ticket)) {
            self.on_fetch_completed(
                ticket.code,
                ticket.generation,
                Err(LookupError::Unavailable { message }),
            );
        }
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("no fetch worker attached".to_string());
        };

        sender
            .try_send(command)
            .map_err(|err| format!("command send failed: {}", err))
    }
}
