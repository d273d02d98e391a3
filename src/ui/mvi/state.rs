//! Base trait for UI state in the MVI layer.

/// Marker trait for UI state objects.
///
/// States are cloned to produce new states, compared to detect changes,
/// and carry everything needed to render their view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
