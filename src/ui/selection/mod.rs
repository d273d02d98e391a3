//! Selection State: the country currently chosen in the picker.
//!
//! Owned by [`App`](crate::ui::app::App); readers get `&CountryCode`,
//! the only writer is [`SelectionIntent::Select`].

mod intent;
mod reducer;
mod state;

pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::SelectionState;
