//! Colors shared by the starfield and the card.

use ratatui::style::Color;

/// Darkest background tone (top and bottom rows).
pub const BG_EDGE: (u8, u8, u8) = (88, 28, 135);
/// Lightest background tone (middle row).
pub const BG_CENTER: (u8, u8, u8) = (107, 33, 168);

pub const CARD_BG: Color = Color::Rgb(118, 62, 170);
pub const FIELD_BG: Color = Color::Rgb(131, 80, 180);
pub const BORDER: Color = Color::Rgb(170, 140, 200);
pub const TEXT: Color = Color::White;
pub const MUTED: Color = Color::Rgb(205, 190, 225);
pub const BUTTON_FG: Color = Color::Rgb(88, 28, 135);

pub const STAR_DIM: Color = Color::Rgb(150, 120, 185);
pub const STAR_MID: Color = Color::Rgb(210, 200, 230);
pub const STAR_BRIGHT: Color = Color::White;

/// Background color for `row` of a `height`-row gradient (edge, center, edge).
pub fn background_at(row: u16, height: u16) -> Color {
    if height <= 1 {
        return rgb(BG_EDGE);
    }
    let mid = f32::from(height - 1) / 2.0;
    let t = 1.0 - ((f32::from(row) - mid).abs() / mid).min(1.0);
    Color::Rgb(
        lerp(BG_EDGE.0, BG_CENTER.0, t),
        lerp(BG_EDGE.1, BG_CENTER.1, t),
        lerp(BG_EDGE.2, BG_CENTER.2, t),
    )
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

fn lerp(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}
