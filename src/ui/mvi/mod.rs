//! Unidirectional state primitives for stateful widgets.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └───────────────────────────────┘
//! ```
//!
//! Lifecycle events (mount, unmount) are intents; the reducer is the only
//! place where a widget's lifecycle state changes.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
