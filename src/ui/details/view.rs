use crate::config::DetailsMode;
use crate::country::CountryCode;
use crate::query::FetchState;
use crate::ui::details::state::DetailsState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub const LOADING_MESSAGE: &str = "loading...";

/// Lines of the details pane.
///
/// Exactly one of: the loading message, the generic error message, or the
/// record. Echo mode never looks at `state`.
pub fn details_lines(
    country: CountryCode,
    mode: DetailsMode,
    state: &FetchState,
) -> Vec<Line<'static>> {
    let heading = Line::from(vec![
        Span::styled(
            country.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", country.label()),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);

    if mode == DetailsMode::Echo {
        return vec![heading];
    }

    match state {
        FetchState::Idle | FetchState::Loading => vec![Line::from(Span::styled(
            LOADING_MESSAGE,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        ))],
        FetchState::Error(err) => vec![Line::from(Span::styled(
            err.user_message(),
            Style::default().fg(STATUS_ERROR),
        ))],
        FetchState::Success(record) => {
            let mut lines = vec![heading, Line::default()];
            lines.extend(
                record
                    .pretty()
                    .lines()
                    .map(|line| Line::styled(line.to_string(), Style::default().fg(HEADER_TEXT))),
            );
            lines
        }
    }
}

pub fn render_details(
    frame: &mut Frame<'_>,
    area: Rect,
    lines: Vec<Line<'static>>,
    details: &DetailsState,
) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).scroll((details.scroll, 0)).block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
