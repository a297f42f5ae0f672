//! Base trait for widget state in MVI architecture.

/// Marker trait for state driven by a reducer.
///
/// States should be:
/// - Plain values (Clone/Copy to derive new states)
/// - Comparable (PartialEq for detecting lifecycle changes)
/// - `Default` as the state before the widget is first rendered
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
