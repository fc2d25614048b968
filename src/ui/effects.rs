//! Particle rendering on top of the board.

use std::f64::consts::{FRAC_PI_4, PI};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use sweep::geometry::BoardGeometry;
use sweep::particles::{Particle, ParticleKind};

const EXPLOSION_PALETTE: [Color; 6] = [
    Color::Red,
    Color::LightRed,
    Color::Yellow,
    Color::LightYellow,
    Color::White,
    Color::DarkGray,
];

const CONFETTI_PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

/// Draw every live particle that falls inside `clip`.
pub fn render_particles(
    buf: &mut Buffer,
    clip: Rect,
    geometry: &BoardGeometry,
    particles: &[Particle],
) {
    for particle in particles {
        let Some((x, y)) = screen_position(geometry, particle) else {
            continue;
        };
        if x < clip.x || y < clip.y || x >= clip.right() || y >= clip.bottom() {
            continue;
        }

        let (symbol, color) = particle_display(particle);
        buf.get_mut(x, y)
            .set_symbol(symbol)
            .set_style(Style::default().fg(color));
    }
}

/// Terminal cell under a particle, `None` above or left of the screen.
fn screen_position(geometry: &BoardGeometry, particle: &Particle) -> Option<(u16, u16)> {
    let x = geometry.origin_x + particle.x * geometry.cell_width;
    let y = geometry.origin_y + particle.y * geometry.cell_height;
    if x < 0.0 || y < 0.0 || x >= u16::MAX as f64 || y >= u16::MAX as f64 {
        return None;
    }
    Some((x as u16, y as u16))
}

fn particle_display(particle: &Particle) -> (&'static str, Color) {
    let index = particle.palette_index as usize;
    match particle.kind {
        ParticleKind::Explosion => {
            let symbol = match particle.remaining_fraction() {
                f if f > 0.66 => "@",
                f if f > 0.33 => "*",
                _ => ".",
            };
            (symbol, EXPLOSION_PALETTE[index % EXPLOSION_PALETTE.len()])
        }
        ParticleKind::Confetti => {
            // Spin cycles through four stroke directions
            let quarter = (particle.rotation.rem_euclid(PI) / FRAC_PI_4) as usize;
            let symbol = ["|", "/", "-", "\\"][quarter % 4];
            (symbol, CONFETTI_PALETTE[index % CONFETTI_PALETTE.len()])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn particle(kind: ParticleKind, x: f64, y: f64) -> Particle {
        Particle {
            kind,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            rotation: 0.0,
            angular_velocity: 0.0,
            lifetime: 1.0,
            max_lifetime: 1.0,
            palette_index: 2,
        }
    }

    fn geometry() -> BoardGeometry {
        BoardGeometry {
            origin_x: 10.0,
            origin_y: 5.0,
            cell_width: 2.0,
            cell_height: 1.0,
            board_size: 5,
        }
    }

    #[test]
    fn test_screen_position() {
        let p = particle(ParticleKind::Explosion, 1.5, 2.5);
        assert_eq!(screen_position(&geometry(), &p), Some((13, 7)));

        let off_screen = particle(ParticleKind::Explosion, -20.0, 0.0);
        assert_eq!(screen_position(&geometry(), &off_screen), None);
    }

    #[test]
    fn test_particle_display() {
        let mut p = particle(ParticleKind::Explosion, 0.0, 0.0);
        assert_eq!(particle_display(&p), ("@", Color::Yellow));
        p.lifetime = 0.1;
        assert_eq!(particle_display(&p).0, ".");

        let mut c = particle(ParticleKind::Confetti, 0.0, 0.0);
        assert_eq!(particle_display(&c), ("|", Color::Yellow));
        c.rotation = std::f64::consts::FRAC_PI_2 + 0.1;
        assert_eq!(particle_display(&c).0, "-");
    }

    #[test]
    fn test_render_particles_clips() {
        let area = Rect::new(0, 0, 30, 12);
        let mut buf = Buffer::empty(area);
        let clip = Rect::new(10, 5, 10, 5);
        let inside = particle(ParticleKind::Confetti, 1.0, 1.0);
        let outside = particle(ParticleKind::Confetti, 8.0, 1.0);

        render_particles(&mut buf, clip, &geometry(), &[inside, outside]);

        assert_eq!(buf.get(12, 6).symbol(), "|");
        assert_eq!(buf.get(26, 6).symbol(), " ");
    }
}
