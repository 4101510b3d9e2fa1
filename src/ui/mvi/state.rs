//! UI state marker.

/// Marker trait for feature state.
///
/// State is a plain value: everything the view needs to draw itself, cloned
/// to produce the next state and compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
