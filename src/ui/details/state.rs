use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetailsState {
    pub scroll: u16,
}

impl UiState for DetailsState {}
