use std::time::{Duration, Instant};

use crate::config::{Location, ShimmerConfiguration};
use crate::ui::mvi::{Reducer, UiState};
use crate::ui::overlay::intent::OverlayIntent;
use crate::ui::overlay::reducer::OverlayReducer;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OverlayState {
    #[default]
    Unmounted,
    Animating {
        mounted_at: Instant,
    },
}

impl UiState for OverlayState {}

impl OverlayState {
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }

    /// Position within the sweep at `now`, or `None` while unmounted.
    pub fn phase(&self, duration: f64, now: Instant) -> Option<AnimationPhase> {
        match self {
            Self::Unmounted => None,
            Self::Animating { mounted_at } => Some(AnimationPhase::from_elapsed(
                now.saturating_duration_since(*mounted_at),
                duration,
            )),
        }
    }
}

/// Where the sweep is: which repetition, and how far into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationPhase {
    /// Zero-based repetition counter.
    pub cycle: u64,
    /// Linear progress in `[0, 1]` from the initial to the final location.
    pub progress: f64,
}

impl AnimationPhase {
    pub const START: AnimationPhase = AnimationPhase {
        cycle: 0,
        progress: 0.0,
    };

    /// Sawtooth timing: progress climbs linearly over `duration` seconds and
    /// jumps back to 0, never reversing.
    ///
    /// An exact multiple of `duration` reports the end of the cycle that just
    /// finished (progress 1.0); any later instant belongs to the next cycle.
    /// A non-positive or non-finite duration holds the sweep at its start.
    pub fn from_elapsed(elapsed: Duration, duration: f64) -> Self {
        if !duration.is_finite() || duration <= 0.0 {
            return Self::START;
        }
        let cycles = elapsed.as_secs_f64() / duration;
        if !cycles.is_finite() || cycles <= 0.0 {
            return Self::START;
        }

        let whole = cycles.floor();
        let progress = cycles - whole;
        if progress == 0.0 {
            Self {
                cycle: whole as u64 - 1,
                progress: 1.0,
            }
        } else {
            Self {
                cycle: whole as u64,
                progress,
            }
        }
    }
}

/// Per-instance state of a shimmer overlay, owned by the host and handed to
/// each render.
///
/// Holds the lifecycle and the gradient endpoints last rendered. Two
/// instances never share anything.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShimmerState {
    overlay: OverlayState,
    endpoints: Option<Location>,
}

impl ShimmerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts the instance if needed and moves the endpoints to where the
    /// sweep is at `now`.
    ///
    /// The mounting call itself observes `initial_location` exactly.
    pub fn observe(&mut self, configuration: &ShimmerConfiguration, now: Instant) -> Location {
        if !self.overlay.is_animating() {
            self.overlay = OverlayReducer::reduce(self.overlay, OverlayIntent::Mount { at: now });
            tracing::debug!(
                duration = configuration.duration,
                opacity = configuration.opacity,
                "shimmer overlay mounted"
            );
        }

        let progress = self
            .overlay
            .phase(configuration.duration, now)
            .map_or(0.0, |phase| phase.progress);
        let endpoints = configuration
            .initial_location
            .lerp(configuration.final_location, progress);
        self.endpoints = Some(endpoints);
        endpoints
    }

    /// Drops the instance from the render tree, discarding its progress.
    pub fn unmount(&mut self) {
        if self.overlay.is_animating() {
            tracing::debug!("shimmer overlay unmounted");
        }
        self.overlay = OverlayReducer::reduce(self.overlay, OverlayIntent::Unmount);
        self.endpoints = None;
    }

    /// Gradient endpoints of the last render, `None` while unmounted.
    pub fn endpoints(&self) -> Option<Location> {
        self.endpoints
    }

    pub fn phase(&self, configuration: &ShimmerConfiguration, now: Instant) -> Option<AnimationPhase> {
        self.overlay.phase(configuration.duration, now)
    }

    pub fn is_animating(&self) -> bool {
        self.overlay.is_animating()
    }

    pub fn lifecycle(&self) -> OverlayState {
        self.overlay
    }
}
