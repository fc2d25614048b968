//! Backdrop starfield, drawn first so every scene paints over it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use sweep::backdrop::{Backdrop, Star};

pub fn render_starfield(buf: &mut Buffer, area: Rect, backdrop: &Backdrop) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    for star in backdrop.stars() {
        let x = area.x + ((star.x * area.width as f64) as u16).min(area.width - 1);
        let y = area.y + ((star.y * area.height as f64) as u16).min(area.height - 1);
        let (symbol, color) = star_display(star);
        buf.get_mut(x, y)
            .set_symbol(symbol)
            .set_style(Style::default().fg(color));
    }
}

fn star_display(star: &Star) -> (&'static str, Color) {
    match star.brightness() {
        b if b > 0.85 => ("*", Color::White),
        b if b > 0.45 => ("+", Color::Gray),
        _ => (".", Color::DarkGray),
    }
}
