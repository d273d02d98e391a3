//! Country Details: what the body shows for the selected country.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DetailsIntent;
pub use reducer::DetailsReducer;
pub use state::DetailsState;
pub use view::{details_lines, render_details, LOADING_MESSAGE};
