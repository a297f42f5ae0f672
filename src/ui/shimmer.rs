use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};

use crate::config::{Rgb, ShimmerConfiguration, UnitPoint};
use crate::ui::blend::{
    blend_cell_color, gradient_parameter, CELL_ASPECT, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND,
};
use crate::ui::overlay::ShimmerState;

/// Renders `content`, then sweeps a translucent gradient band across it.
///
/// The band is screen-blended onto both foreground and background of every
/// cell, so it lightens the content without hiding it. Colors the blend
/// leaves unchanged are not rewritten, so a transparent band keeps the
/// buffer identical to the plain content. Its position comes
/// from the [`ShimmerState`] passed to `render`: the first render mounts the
/// instance at `initial_location`, later renders follow the sweep until the
/// state is unmounted.
pub struct ShimmerOverlay<W> {
    configuration: ShimmerConfiguration,
    content: W,
    now: Option<Instant>,
}

impl<W> ShimmerOverlay<W> {
    pub fn new(configuration: ShimmerConfiguration, content: W) -> Self {
        Self {
            configuration,
            content,
            now: None,
        }
    }

    /// Pins the frame clock instead of reading `Instant::now()` on render.
    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    pub fn configuration(&self) -> &ShimmerConfiguration {
        &self.configuration
    }
}

impl<W: Widget> StatefulWidget for ShimmerOverlay<W> {
    type State = ShimmerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.content.render(area, buf);

        // Content is laid out before the sweep observes its first frame
        let now = self.now.unwrap_or_else(Instant::now);
        let endpoints = state.observe(&self.configuration, now);

        let visible = area.intersection(buf.area);
        if visible.is_empty() {
            return;
        }

        let width = area.width as f64;
        let height = area.height as f64;
        let extent = (width, height * CELL_ASPECT);
        let opacity = self.configuration.opacity;
        for y in visible.top()..visible.bottom() {
            for x in visible.left()..visible.right() {
                let point = UnitPoint::new(
                    ((x - area.x) as f64 + 0.5) / width,
                    ((y - area.y) as f64 + 0.5) / height,
                );
                let band = self
                    .configuration
                    .gradient
                    .sample(gradient_parameter(endpoints, point, extent));
                // Screening with black leaves the cell as it is
                if band == Rgb::BLACK {
                    continue;
                }

                if let Some(cell) = buf.cell_mut((x, y)) {
                    if let Some(fg) = blend_cell_color(cell.fg, DEFAULT_FOREGROUND, band, opacity)
                    {
                        cell.set_fg(fg);
                    }
                    if let Some(bg) = blend_cell_color(cell.bg, DEFAULT_BACKGROUND, band, opacity)
                    {
                        cell.set_bg(bg);
                    }
                }
            }
        }
    }
}
