use crate::ui::details::intent::DetailsIntent;
use crate::ui::details::state::DetailsState;
use crate::ui::mvi::Reducer;

pub struct DetailsReducer;

impl Reducer for DetailsReducer {
    type State = DetailsState;
    type Intent = DetailsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailsIntent::ScrollUp { lines } => DetailsState {
                scroll: state.scroll.saturating_sub(lines),
            },
            DetailsIntent::ScrollDown { lines, max } => DetailsState {
                scroll: state.scroll.saturating_add(lines).min(max),
            },
            DetailsIntent::Reset => DetailsState::default(),
        }
    }
}
