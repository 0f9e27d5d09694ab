//! Particle field behind the landing page animation.
//!
//! A fixed number of points drift in straight lines and wrap around the
//! viewport edges. The field owns no timer: the event loop calls
//! [`ParticleField::next_frame`] whenever the particle ticker fires.

use std::f64::consts::TAU;

use rand::Rng;

use crate::types::particle::{Frame, Particle};

const SIZE_RANGE: (f64, f64) = (2.0, 8.0);
const SPEED_RANGE: (f64, f64) = (0.5, 2.0);
const ALPHA_RANGE: (u8, u8) = (50, 150);

/// Gradient painted behind the particles, top to bottom.
pub const BACKGROUND_TOP: [u8; 3] = [30, 30, 50];
pub const BACKGROUND_BOTTOM: [u8; 3] = [10, 10, 20];

/// A set of independently moving decorative points.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    /// Creates `count` randomly placed particles inside a `width` x `height` viewport.
    pub fn new<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(count),
            width: width.max(0.0),
            height: height.max(0.0),
        };
        field.init(count, rng);
        field
    }

    /// Builds a field from existing particles without re-randomising them.
    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Replaces the field's contents with `count` fresh particles.
    pub fn init<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.particles = (0..count).map(|_| self.spawn(rng)).collect();
    }

    /// Re-randomises every particle, keeping the count.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let count = self.particles.len();
        self.init(count, rng);
    }

    fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Particle {
        Particle {
            x: rng.random_range(0.0..=self.width),
            y: rng.random_range(0.0..=self.height),
            size: rng.random_range(SIZE_RANGE.0..=SIZE_RANGE.1),
            speed: rng.random_range(SPEED_RANGE.0..=SPEED_RANGE.1),
            direction: rng.random_range(0.0..TAU),
            alpha: rng.random_range(ALPHA_RANGE.0..=ALPHA_RANGE.1),
        }
    }

    /// Advances every particle by one time unit and wraps it back into the viewport.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            p.x = wrap(p.x + p.direction.cos() * p.speed, width);
            p.y = wrap(p.y + p.direction.sin() * p.speed, height);
        }
    }

    /// Sprites for the current state, without advancing.
    pub fn render(&self) -> Frame {
        Frame {
            sprites: self.particles.iter().map(Particle::sprite).collect(),
        }
    }

    /// Ticks once and renders the result.
    pub fn next_frame(&mut self) -> Frame {
        self.tick();
        self.render()
    }

    /// Endless sequence of frames, one tick apart.
    pub fn frames(&mut self) -> impl Iterator<Item = Frame> + '_ {
        std::iter::repeat_with(move || self.next_frame())
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Hard wrap: leaving past one edge re-enters at the opposite edge.
fn wrap(value: f64, limit: f64) -> f64 {
    if value > limit {
        0.0
    } else if value < 0.0 {
        limit
    } else {
        value
    }
}
