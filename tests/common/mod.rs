//! Shared test widgets and buffer helpers.

#![allow(dead_code)]

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;
use shimmer::Rgb;

/// Paints the background of its whole area.
pub struct Fill(pub Color);

impl Widget for Fill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.0));
    }
}

pub fn area() -> Rect {
    Rect::new(0, 0, 10, 2)
}

pub fn blank() -> Buffer {
    Buffer::empty(area())
}

pub fn bg_at(buf: &Buffer, x: u16, y: u16) -> Rgb {
    match buf[(x, y)].bg {
        Color::Rgb(r, g, b) => Rgb(r, g, b),
        other => panic!("expected RGB background at ({x}, {y}), got {other:?}"),
    }
}
