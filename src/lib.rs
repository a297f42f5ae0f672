//! Shimmer loading placeholder for ratatui widgets.
//!
//! Wrap any widget with [`ShimmerExt::shimmer`] and render it with a
//! [`ShimmerState`] kept across frames:
//!
//! ```no_run
//! use ratatui::widgets::Paragraph;
//! use shimmer::{ShimmerExt, ShimmerState};
//!
//! shimmer::logging::init_tracing().ok();
//!
//! let mut state = ShimmerState::default();
//! let is_loading = true;
//! # let mut terminal = ratatui::Terminal::new(ratatui::backend::TestBackend::new(20, 1)).unwrap();
//! terminal
//!     .draw(|frame| {
//!         let widget = Paragraph::new("Sample").shimmer(is_loading);
//!         frame.render_stateful_widget(widget, frame.area(), &mut state);
//!     })
//!     .unwrap();
//! ```

pub mod config;
pub mod logging;
pub mod ui;

pub use config::{ConfigError, Gradient, GradientStop, Location, Rgb, ShimmerConfiguration, UnitPoint};
pub use ui::{ShimmerExt, ShimmerOverlay, ShimmerState, Shimmered};
