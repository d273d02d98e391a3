use crate::country::CountryCode;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::picker::state::PickerState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, POPUP_BORDER};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DROPDOWN_WIDTH: u16 = 28;

/// Draw the dropdown over the body while the picker is open.
pub fn render_picker_dropdown(frame: &mut Frame<'_>, state: &PickerState, selected: CountryCode) {
    let PickerState::Open { highlighted } = *state else {
        return;
    };

    let lines: Vec<Line> = CountryCode::ALL
        .iter()
        .enumerate()
        .map(|(idx, code)| {
            let marker = if *code == selected { "●" } else { " " };
            let mut style = Style::default().fg(HEADER_TEXT);
            if idx == highlighted {
                style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(ACCENT)),
                Span::styled(format!("{}. {} ({})", idx + 1, code.label(), code), style),
            ])
        })
        .collect();

    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(DROPDOWN_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Country ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
