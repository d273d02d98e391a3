use crate::country::CountryCode;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open {
        /// Index into [`CountryCode::ALL`].
        highlighted: usize,
    },
}

impl UiState for PickerState {}

impl PickerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Code under the cursor while the dropdown is open.
    pub fn highlighted_code(&self) -> Option<CountryCode> {
        match self {
            Self::Open { highlighted } => CountryCode::from_index(*highlighted),
            Self::Closed => None,
        }
    }
}
