//! Color math for compositing the shimmer band onto terminal cells.

use ratatui::style::Color;

use crate::config::{Location, Rgb, UnitPoint};

/// Stand-in for `Color::Reset` in the background: an unset terminal
/// background is assumed dark.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::BLACK;

/// Stand-in for `Color::Reset` in the foreground (ANSI white).
pub const DEFAULT_FOREGROUND: Rgb = Rgb(0xc0, 0xc0, 0xc0);

/// Height of a terminal cell relative to its width.
pub const CELL_ASPECT: f64 = 2.0;

/// Screen blend: `1 - (1 - a)(1 - b)` per channel. Never darker than either
/// input; black is the identity.
pub fn screen(base: Rgb, layer: Rgb) -> Rgb {
    let channel = |a: u8, b: u8| 255 - (((255 - a as u16) * (255 - b as u16) + 127) / 255) as u8;
    Rgb(
        channel(base.0, layer.0),
        channel(base.1, layer.1),
        channel(base.2, layer.2),
    )
}

/// Screen-blends `layer` onto `base`, then mixes the result with `base` by
/// `opacity`. Opacity is clamped to `[0, 1]`; NaN counts as fully transparent.
pub fn composite(base: Rgb, layer: Rgb, opacity: f64) -> Rgb {
    let opacity = if opacity.is_nan() {
        0.0
    } else {
        opacity.clamp(0.0, 1.0)
    };
    base.lerp(screen(base, layer), opacity)
}

/// Composites `layer` onto a cell color, or `None` when the result would not
/// differ from the color already there.
///
/// `fallback` stands in for `Color::Reset` during the blend only; a reset
/// color is kept as-is unless the band actually moves it.
pub fn blend_cell_color(color: Color, fallback: Rgb, layer: Rgb, opacity: f64) -> Option<Color> {
    let base = color_to_rgb(color, fallback);
    let blended = composite(base, layer, opacity);
    (blended != base).then(|| blended.into())
}

/// Projection of `point` onto the gradient axis from `location.start`
/// (`0.0`) to `location.end` (`1.0`). Unclamped. A zero-length axis maps
/// everything to `0.0`.
///
/// Unit points are scaled by `extent` (the real width and height of the
/// area) first, so bands stay perpendicular to the axis as drawn rather than
/// as normalized.
pub fn gradient_parameter(location: Location, point: UnitPoint, extent: (f64, f64)) -> f64 {
    let (width, height) = extent;
    let dx = (location.end.x - location.start.x) * width;
    let dy = (location.end.y - location.start.y) * height;
    let length_sq = dx * dx + dy * dy;
    if !length_sq.is_finite() || length_sq <= f64::EPSILON {
        return 0.0;
    }
    let px = (point.x - location.start.x) * width;
    let py = (point.y - location.start.y) * height;
    (px * dx + py * dy) / length_sq
}

/// Best-effort RGB value of a terminal color; `Reset` maps to `fallback`.
pub fn color_to_rgb(color: Color, fallback: Rgb) -> Rgb {
    match color {
        Color::Reset => fallback,
        Color::Rgb(r, g, b) => Rgb(r, g, b),
        Color::Indexed(i) => indexed_to_rgb(i),
        Color::Black => ANSI[0],
        Color::Red => ANSI[1],
        Color::Green => ANSI[2],
        Color::Yellow => ANSI[3],
        Color::Blue => ANSI[4],
        Color::Magenta => ANSI[5],
        Color::Cyan => ANSI[6],
        Color::Gray => ANSI[7],
        Color::DarkGray => ANSI[8],
        Color::LightRed => ANSI[9],
        Color::LightGreen => ANSI[10],
        Color::LightYellow => ANSI[11],
        Color::LightBlue => ANSI[12],
        Color::LightMagenta => ANSI[13],
        Color::LightCyan => ANSI[14],
        Color::White => ANSI[15],
    }
}

const ANSI: [Rgb; 16] = [
    Rgb(0x00, 0x00, 0x00),
    Rgb(0x80, 0x00, 0x00),
    Rgb(0x00, 0x80, 0x00),
    Rgb(0x80, 0x80, 0x00),
    Rgb(0x00, 0x00, 0x80),
    Rgb(0x80, 0x00, 0x80),
    Rgb(0x00, 0x80, 0x80),
    Rgb(0xc0, 0xc0, 0xc0),
    Rgb(0x80, 0x80, 0x80),
    Rgb(0xff, 0x00, 0x00),
    Rgb(0x00, 0xff, 0x00),
    Rgb(0xff, 0xff, 0x00),
    Rgb(0x00, 0x00, 0xff),
    Rgb(0xff, 0x00, 0xff),
    Rgb(0x00, 0xff, 0xff),
    Rgb(0xff, 0xff, 0xff),
];

const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

fn indexed_to_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => ANSI[index as usize],
        16..=231 => {
            let i = index - 16;
            Rgb(
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i / 6) % 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        _ => {
            let level = 8 + (index - 232) * 10;
            Rgb(level, level, level)
        }
    }
}
