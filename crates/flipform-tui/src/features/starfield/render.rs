//! Starfield rendering: gradient backdrop plus twinkling points.

use std::time::Duration;

use flipform_core::DecorativePoint;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::Color;

use super::{StarfieldState, Twinkle};
use crate::common::palette;

/// Paints the background gradient and the stars over `area`.
pub fn render_starfield(frame: &mut Frame, area: Rect, stars: &StarfieldState, clock: Duration) {
    let buf = frame.buffer_mut();

    for row in 0..area.height {
        let bg = palette::background_at(row, area.height);
        for col in 0..area.width {
            if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                cell.reset();
                cell.set_bg(bg);
            }
        }
    }

    for point in stars.points() {
        let Some(position) = star_position(point, area) else {
            continue;
        };
        let (symbol, color) = star_glyph(stars.twinkle(point, clock));
        if let Some(cell) = buf.cell_mut(position) {
            cell.set_symbol(symbol).set_fg(color);
        }
    }
}

/// Cell a point lands on inside `area`, if the area is non-empty.
pub fn star_position(point: &DecorativePoint, area: Rect) -> Option<Position> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let x = u32::from(area.width) * u32::from(point.left_percent) / 100;
    let y = u32::from(area.height) * u32::from(point.top_percent) / 100;
    Some(Position::new(area.x + x as u16, area.y + y as u16))
}

fn star_glyph(twinkle: Twinkle) -> (&'static str, Color) {
    match twinkle {
        Twinkle::Dim => ("·", palette::STAR_DIM),
        Twinkle::Mid => ("•", palette::STAR_MID),
        Twinkle::Bright => ("✦", palette::STAR_BRIGHT),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_positions_scale_with_area() {
        let point = DecorativePoint::at(1); // 67% top, 49% left
        let area = Rect::new(2, 1, 100, 50);
        assert_eq!(star_position(&point, area), Some(Position::new(51, 34)));
        assert_eq!(star_position(&point, Rect::new(0, 0, 0, 10)), None);
    }

    #[test]
    fn test_every_star_is_drawn_inside_the_area() {
        let stars = StarfieldState::new(50, Duration::from_secs(3));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_starfield(frame, frame.area(), &stars, Duration::ZERO))
            .unwrap();

        let buffer = terminal.backend().buffer();
        for point in stars.points() {
            let position = star_position(point, buffer.area).unwrap();
            let symbol = buffer[(position.x, position.y)].symbol();
            assert!(
                ["·", "•", "✦"].contains(&symbol),
                "point {} at {position:?} drew {symbol:?}",
                point.id
            );
            // Stars stay in the upper 70% of the sky.
            assert!(position.y < 17);
        }
    }
}
