use crate::country::CountryCode;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum PickerIntent {
    /// Show the dropdown with `current` highlighted.
    Open { current: CountryCode },
    Close,
    MoveUp,
    MoveDown,
}

impl Intent for PickerIntent {}
