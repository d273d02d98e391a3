mod dropdown;
mod intent;
mod reducer;
mod state;

pub use dropdown::render_picker_dropdown;
pub use intent::PickerIntent;
pub use reducer::PickerReducer;
pub use state::PickerState;
