//! Base trait for intents (lifecycle events) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Lifecycle events of a stateful widget (mount, unmount)
/// - Host decisions that change what is rendered (toggling a decoration)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
