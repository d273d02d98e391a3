use crate::country::CountryCode;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub country: CountryCode,
}

impl UiState for SelectionState {}

impl SelectionState {
    pub fn new(country: CountryCode) -> Self {
        Self { country }
    }
}
