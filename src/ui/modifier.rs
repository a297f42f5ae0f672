use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{StatefulWidget, Widget};

use crate::config::ShimmerConfiguration;
use crate::ui::overlay::ShimmerState;
use crate::ui::shimmer::ShimmerOverlay;

/// Content with or without the shimmer overlay, chosen by an `is_active` flag.
///
/// Rendering `Plain` unmounts the state it is given, so switching back to
/// `Decorated` later restarts the sweep from its initial location.
pub enum Shimmered<W> {
    Plain(W),
    Decorated(ShimmerOverlay<W>),
}

impl<W> Shimmered<W> {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Decorated(_))
    }

    /// Pins the frame clock of a decorated overlay; no-op on plain content.
    pub fn at(self, now: Instant) -> Self {
        match self {
            Self::Plain(content) => Self::Plain(content),
            Self::Decorated(overlay) => Self::Decorated(overlay.at(now)),
        }
    }
}

impl<W: Widget> StatefulWidget for Shimmered<W> {
    type State = ShimmerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        match self {
            Self::Plain(content) => {
                state.unmount();
                Widget::render(content, area, buf);
            }
            Self::Decorated(overlay) => StatefulWidget::render(overlay, area, buf, state),
        }
    }
}

/// Adds `.shimmer(..)` to every widget.
pub trait ShimmerExt: Widget + Sized {
    /// Decorates with the default look when `is_active` is true.
    fn shimmer(self, is_active: bool) -> Shimmered<Self> {
        self.shimmer_with(ShimmerConfiguration::default(), is_active)
    }

    fn shimmer_with(self, configuration: ShimmerConfiguration, is_active: bool) -> Shimmered<Self> {
        if is_active {
            Shimmered::Decorated(ShimmerOverlay::new(configuration, self))
        } else {
            Shimmered::Plain(self)
        }
    }
}

impl<W: Widget> ShimmerExt for W {}
