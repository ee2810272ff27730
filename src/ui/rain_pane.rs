use ratatui::{layout::Rect, widgets::Paragraph, Frame};

use crate::rain::{Glyph, GlyphRain};
use crate::ui::styles::glyph_style;

/// Draw the falling glyphs across the whole area
pub fn render_rain_pane(f: &mut Frame, rain: &GlyphRain, area: Rect) {
    if rain.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }

    for glyph in rain.glyphs() {
        let intensity = glyph.intensity();
        if intensity <= 0.0 {
            continue;
        }
        let (x, y) = glyph_cell(glyph, area);
        let cell = Rect::new(x, y, 1, 1);
        f.render_widget(
            Paragraph::new(glyph.ch.to_string()).style(glyph_style(intensity)),
            cell,
        );
    }
}

/// Map a glyph's fractional position onto a cell inside `area`
fn glyph_cell(glyph: &Glyph, area: Rect) -> (u16, u16) {
    let col = ((glyph.x * area.width as f64) as u16).min(area.width - 1);
    let row = ((glyph.phase * area.height as f64) as u16).min(area.height - 1);
    (area.x + col, area.y + row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(x: f64, phase: f64) -> Glyph {
        Glyph {
            x,
            phase,
            period: 10.0,
            ch: '#',
        }
    }

    #[test]
    fn test_glyph_cell_scales_to_area() {
        let area = Rect::new(5, 2, 100, 50);
        assert_eq!(glyph_cell(&glyph(0.0, 0.0), area), (5, 2));
        assert_eq!(glyph_cell(&glyph(0.5, 0.5), area), (55, 27));
    }

    #[test]
    fn test_glyph_cell_stays_inside() {
        let area = Rect::new(0, 0, 10, 10);
        assert_eq!(glyph_cell(&glyph(0.9999, 0.9999), area), (9, 9));
    }
}
