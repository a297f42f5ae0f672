use std::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayIntent {
    /// The overlay is rendered while active. The first one per mount records
    /// the animation start; later ones are ignored.
    Mount { at: Instant },
    /// The overlay left the render tree. Animation progress is discarded.
    Unmount,
}

impl Intent for OverlayIntent {}
