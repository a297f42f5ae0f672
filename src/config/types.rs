use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A 2D point expressed as a fraction of the content's bounding box.
///
/// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right one.
/// Coordinates outside `[0, 1]` lie off-canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const ZERO: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const CENTER: UnitPoint = UnitPoint::new(0.5, 0.5);
    pub const LEADING: UnitPoint = UnitPoint::new(0.0, 0.5);
    pub const TRAILING: UnitPoint = UnitPoint::new(1.0, 0.5);
    pub const TOP: UnitPoint = UnitPoint::new(0.5, 0.0);
    pub const BOTTOM: UnitPoint = UnitPoint::new(0.5, 1.0);
    pub const TOP_LEADING: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const TOP_TRAILING: UnitPoint = UnitPoint::new(1.0, 0.0);
    pub const BOTTOM_LEADING: UnitPoint = UnitPoint::new(0.0, 1.0);
    pub const BOTTOM_TRAILING: UnitPoint = UnitPoint::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`; `t = 0` yields `self`.
    pub fn lerp(self, other: UnitPoint, t: f64) -> UnitPoint {
        UnitPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Start and end points of the gradient band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub start: UnitPoint,
    pub end: UnitPoint,
}

impl Location {
    pub const fn new(start: UnitPoint, end: UnitPoint) -> Self {
        Self { start, end }
    }

    pub fn lerp(self, other: Location, t: f64) -> Location {
        Location {
            start: self.start.lerp(other.start, t),
            end: self.end.lerp(other.end, t),
        }
    }
}

/// RGB triplet, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

    /// Per-channel interpolation, rounded to the nearest value.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// A color pinned to a normalized position along the gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgb,
    pub location: f64,
}

impl GradientStop {
    pub const fn new(color: Rgb, location: f64) -> Self {
        Self { color, location }
    }
}

/// Ordered color stops of a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn new(stops: Vec<GradientStop>) -> Self {
        Self { stops }
    }

    /// Black, white, white, black: a bright band with dark edges.
    pub fn shimmering() -> Self {
        Self::new(vec![
            GradientStop::new(Rgb::BLACK, 0.0),
            GradientStop::new(Rgb::WHITE, 0.4),
            GradientStop::new(Rgb::WHITE, 0.6),
            GradientStop::new(Rgb::BLACK, 1.0),
        ])
    }

    /// Color at position `t` along the gradient axis.
    ///
    /// Stops are taken in the order given. Before the first stop the first
    /// color is used, past the last stop the last one. An empty gradient
    /// samples black.
    pub fn sample(&self, t: f64) -> Rgb {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgb::BLACK,
        };
        if t.is_nan() || t <= first.location {
            return first.color;
        }
        if t >= last.location {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t >= a.location && t <= b.location {
                let span = b.location - a.location;
                if span <= f64::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.location) / span);
            }
        }
        last.color
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self::shimmering()
    }
}

/// Visual parameters of the shimmer effect.
///
/// Construction never validates: a non-positive `duration` or an `opacity`
/// outside `[0, 1]` is the caller's responsibility. See
/// [`ShimmerConfiguration::validate`] for an opt-in check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShimmerConfiguration {
    #[serde(default)]
    pub gradient: Gradient,
    /// Length of one sweep in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_initial_location")]
    pub initial_location: Location,
    #[serde(default = "default_final_location")]
    pub final_location: Location,
}

fn default_duration() -> f64 {
    1.5
}

fn default_opacity() -> f64 {
    0.2
}

fn default_initial_location() -> Location {
    Location::new(UnitPoint::new(-3.0, -1.0), UnitPoint::LEADING)
}

fn default_final_location() -> Location {
    Location::new(UnitPoint::TRAILING, UnitPoint::new(4.0, 1.0))
}

impl ShimmerConfiguration {
    pub fn new(
        gradient: Gradient,
        duration: f64,
        opacity: f64,
        initial_location: Location,
        final_location: Location,
    ) -> Self {
        Self {
            gradient,
            duration,
            opacity,
            initial_location,
            final_location,
        }
    }
}

impl Default for ShimmerConfiguration {
    /// Band starts off-canvas to the upper-left and sweeps to the lower-right
    /// in 1.5s at 20% opacity.
    fn default() -> Self {
        Self {
            gradient: Gradient::shimmering(),
            duration: default_duration(),
            opacity: default_opacity(),
            initial_location: default_initial_location(),
            final_location: default_final_location(),
        }
    }
}
