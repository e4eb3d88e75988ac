//! Drifting particle backdrop, drawn on a canvas behind everything else.

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};
use rand::Rng;

use crate::constants::PARTICLE_COUNT;

/// Drift speed in px/s.
const DRIFT_SPEED: f32 = 18.0;
const RADIUS_RANGE: (f32, f32) = (0.3, 3.0);
const OPACITY_RANGE: (f32, f32) = (0.05, 0.08);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// Velocity in px/s.
    pub velocity: (f32, f32),
    /// Oscillation phases for radius and opacity, in radians.
    pub phase: (f32, f32),
    /// Oscillation rates for radius and opacity, in rad/s.
    pub rate: (f32, f32),
}

impl Particle {
    fn random<R: Rng + ?Sized>(bounds: (f32, f32), rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(0.2..1.0) * DRIFT_SPEED;
        Self {
            position: Point::new(
                rng.gen_range(0.0..bounds.0.max(1.0)),
                rng.gen_range(0.0..bounds.1.max(1.0)),
            ),
            velocity: (angle.cos() * speed, angle.sin() * speed),
            phase: (
                rng.gen_range(0.0..std::f32::consts::TAU),
                rng.gen_range(0.0..std::f32::consts::TAU),
            ),
            rate: (rng.gen_range(0.5..2.0), rng.gen_range(0.1..0.4)),
        }
    }

    pub fn radius(&self) -> f32 {
        lerp(RADIUS_RANGE, wave(self.phase.0))
    }

    pub fn opacity(&self) -> f32 {
        lerp(OPACITY_RANGE, wave(self.phase.1))
    }
}

/// Map a phase to 0..=1.
fn wave(phase: f32) -> f32 {
    0.5 + 0.5 * phase.sin()
}

fn lerp(range: (f32, f32), t: f32) -> f32 {
    range.0 + (range.1 - range.0) * t
}

/// All particles plus the area they bounce inside.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: (f32, f32),
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(bounds: (f32, f32), rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::random(bounds, rng))
            .collect();
        Self { particles, bounds }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn resize(&mut self, bounds: (f32, f32)) {
        self.bounds = bounds;
        for p in &mut self.particles {
            p.position.x = p.position.x.clamp(0.0, bounds.0);
            p.position.y = p.position.y.clamp(0.0, bounds.1);
        }
    }

    /// Move every particle by `dt` seconds, bouncing off the edges.
    pub fn advance(&mut self, dt: f32) {
        let (w, h) = self.bounds;
        for p in &mut self.particles {
            p.position.x += p.velocity.0 * dt;
            p.position.y += p.velocity.1 * dt;

            if p.position.x < 0.0 || p.position.x > w {
                p.velocity.0 = -p.velocity.0;
                p.position.x = p.position.x.clamp(0.0, w);
            }
            if p.position.y < 0.0 || p.position.y > h {
                p.velocity.1 = -p.velocity.1;
                p.position.y = p.position.y.clamp(0.0, h);
            }

            p.phase.0 = (p.phase.0 + p.rate.0 * dt) % std::f32::consts::TAU;
            p.phase.1 = (p.phase.1 + p.rate.1 * dt) % std::f32::consts::TAU;
        }
    }
}

/// Canvas program borrowing the field for one frame.
pub struct ParticleLayer<'a> {
    field: &'a ParticleField,
}

impl<'a> ParticleLayer<'a> {
    pub fn new(field: &'a ParticleField) -> Self {
        Self { field }
    }
}

impl<Message> canvas::Program<Message> for ParticleLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, Size::new(bounds.width, bounds.height));
        for p in self.field.particles() {
            let dot = Path::circle(p.position, p.radius());
            frame.fill(
                &dot,
                Color {
                    a: p.opacity(),
                    ..Color::WHITE
                },
            );
        }
        vec![frame.into_geometry()]
    }
}
