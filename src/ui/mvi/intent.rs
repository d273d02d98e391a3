//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents represent user actions (key presses) and system events
/// (lookup results) that a reducer turns into a new state.
pub trait Intent: Send + 'static {}
