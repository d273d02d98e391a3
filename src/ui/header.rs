use crate::config::DetailsMode;
use crate::country::CountryCode;
use crate::query::FetchState;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        country: CountryCode,
        mode: DetailsMode,
        state: &FetchState,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = match (mode, state) {
            (DetailsMode::Echo, _) => ("echo", HEADER_SEPARATOR),
            (_, FetchState::Idle | FetchState::Loading) => ("fetching", HEADER_SEPARATOR),
            (_, FetchState::Success(_)) => ("ok", STATUS_OK),
            (_, FetchState::Error(_)) => ("error", STATUS_ERROR),
        };

        let line = Line::from(vec![
            Span::styled("  Country Picker", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} ({}) ▾", country.label(), country), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
