//! Lifecycle of a shimmer overlay instance.
//!
//! An instance is either `Unmounted` or `Animating` since some mount instant.
//! The sweep position is derived from the time elapsed since that instant,
//! so it never has to be stepped manually.

mod intent;
mod reducer;
mod state;

pub use intent::OverlayIntent;
pub use reducer::OverlayReducer;
pub use state::{AnimationPhase, OverlayState, ShimmerState};
