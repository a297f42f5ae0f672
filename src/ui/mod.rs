pub mod blend;
pub mod modifier;
pub mod mvi;
pub mod overlay;
pub mod shimmer;

pub use modifier::{ShimmerExt, Shimmered};
pub use overlay::ShimmerState;
pub use shimmer::ShimmerOverlay;
