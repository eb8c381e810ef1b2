//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be immutable (Clone to create new states), self-contained
/// (all data needed to render the view) and comparable (PartialEq for
/// detecting changes).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
