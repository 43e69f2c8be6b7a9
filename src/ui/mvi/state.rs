//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// States are cloned to produce successors, carry everything needed to
/// render their view, and are comparable so changes can be detected.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
