use crate::country::CountryCode;
use crate::ui::mvi::Reducer;
use crate::ui::picker::intent::PickerIntent;
use crate::ui::picker::state::PickerState;

pub struct PickerReducer;

impl Reducer for PickerReducer {
    type State = PickerState;
    type Intent = PickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = CountryCode::ALL.len();
        match intent {
            PickerIntent::Open { current } => PickerState::Open {
                highlighted: current.index(),
            },
            PickerIntent::Close => PickerState::Closed,
            PickerIntent::MoveUp => match state {
                PickerState::Open { highlighted } => PickerState::Open {
                    highlighted: if highlighted == 0 {
                        len.saturating_sub(1)
                    } else {
                        highlighted - 1
                    },
                },
                other => other,
            },
            PickerIntent::MoveDown => match state {
                PickerState::Open { highlighted } => PickerState::Open {
                    highlighted: if highlighted + 1 >= len {
                        0
                    } else {
                        highlighted + 1
                    },
                },
                other => other,
            },
        }
    }
}
