use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum DetailsIntent {
    ScrollUp { lines: u16 },
    /// `max` is the last scroll offset that still shows content.
    ScrollDown { lines: u16, max: u16 },
    /// Selection changed or the record was replaced.
    Reset,
}

impl Intent for DetailsIntent {}
