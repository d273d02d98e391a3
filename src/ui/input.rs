use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_LINES: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    if app.picker().is_open() {
        match key.code {
            KeyCode::Esc => app.close_picker(),
            KeyCode::Up | KeyCode::Char('k') => app.move_picker(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_picker(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.commit_picker(),
            KeyCode::Char(ch) => {
                if let Some(number) = ch.to_digit(10) {
                    app.select_by_number(number as usize);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.request_quit(),
        KeyCode::Enter | KeyCode::Char(' ') => app.open_picker(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_details_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_details_down(1),
        KeyCode::PageUp => app.scroll_details_up(PAGE_LINES),
        KeyCode::PageDown => app.scroll_details_down(PAGE_LINES),
        KeyCode::Home => app.scroll_details_up(u16::MAX),
        KeyCode::Char(ch) => {
            if let Some(number) = ch.to_digit(10) {
                app.select_by_number(number as usize);
            }
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
