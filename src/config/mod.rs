mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Gradient, GradientStop, Location, Rgb, ShimmerConfiguration, UnitPoint};
