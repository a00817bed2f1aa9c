use rand::Rng;
use raylib::prelude::*;

use crate::constants::*;
use crate::engine::{Engine, SurfaceMode};
use crate::theme::with_opacity;

const PALETTE: [Color; 3] = [
    Color { r: 100, g: 240, b: 255, a: 255 },
    Color { r: 77, g: 209, b: 255, a: 255 },
    Color { r: 56, g: 189, b: 248, a: 255 },
];

#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2, // Pixels per second, fixed for the particle's lifetime
    pub size: f32,
    pub opacity: f32,
    pub color: Color,
}

impl Particle {
    fn random(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            position: Vector2::new(random_below(rng, width), random_below(rng, height)),
            velocity: Vector2::new(
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
                rng.random_range(-PARTICLE_MAX_SPEED..PARTICLE_MAX_SPEED),
            ),
            size: rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            opacity: rng.random_range(PARTICLE_MIN_OPACITY..PARTICLE_MAX_OPACITY),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        }
    }
}

/// Number of particles for a viewport `width` pixels wide, never more than
/// `MAX_PARTICLES` whatever `max_count` asks for.
pub fn particle_count(width: f32, max_count: usize) -> usize {
    if width.is_nan() || width <= 0.0 {
        return 0;
    }
    ((width / PARTICLE_DENSITY).floor() as usize).min(max_count.min(MAX_PARTICLES))
}

// Toroidal wrap into [0, bound).
fn wrap(value: f32, bound: f32) -> f32 {
    if bound.is_nan() || bound <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(bound);
    // rem_euclid may round up to `bound` for tiny negative inputs
    if wrapped >= bound { 0.0 } else { wrapped }
}

fn random_below(rng: &mut impl Rng, bound: f32) -> f32 {
    if bound > 0.0 { rng.random_range(0.0..bound) } else { 0.0 }
}

/// Drifting glow particles covering the whole viewport.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    max_count: usize,
}

impl ParticleField {
    pub fn new(max_count: usize) -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
            max_count,
        }
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn regenerate(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let count = particle_count(width, self.max_count);
        let mut rng = rand::rng();
        self.particles = (0..count)
            .map(|_| Particle::random(&mut rng, width, height))
            .collect();

        log::debug!("Regenerated {} particles for {}x{}", count, width, height);
    }
}

impl Engine for ParticleField {
    fn resize(&mut self, width: f32, height: f32) {
        self.regenerate(width, height);
    }

    fn update(&mut self, dt: f32) {
        for particle in self.particles.iter_mut() {
            particle.position.x = wrap(particle.position.x + particle.velocity.x * dt, self.width);
            particle.position.y = wrap(particle.position.y + particle.velocity.y * dt, self.height);
        }
    }

    fn draw(&self, d: &mut SurfaceMode) {
        for particle in self.particles.iter() {
            // Soft glow: full color at the center, transparent at the rim
            d.draw_circle_gradient(
                particle.position.x as i32,
                particle.position.y as i32,
                particle.size * PARTICLE_GLOW,
                with_opacity(particle.color, particle.opacity),
                with_opacity(particle.color, 0.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_follows_viewport_width() {
        assert_eq!(particle_count(1200.0, MAX_PARTICLES), 80);
        assert_eq!(particle_count(300.0, MAX_PARTICLES), 20);
        assert_eq!(particle_count(3840.0, MAX_PARTICLES), 80);
        assert_eq!(particle_count(14.9, MAX_PARTICLES), 0);
        assert_eq!(particle_count(0.0, MAX_PARTICLES), 0);
        assert_eq!(particle_count(-50.0, MAX_PARTICLES), 0);
        assert_eq!(particle_count(f32::NAN, MAX_PARTICLES), 0);
        assert_eq!(particle_count(1200.0, 10), 10);
    }

    #[test]
    fn oversized_cap_is_clamped() {
        assert_eq!(particle_count(3840.0, 500), MAX_PARTICLES);

        let mut field = ParticleField::new(500);
        field.resize(3840.0, 2160.0);
        assert_eq!(field.len(), MAX_PARTICLES);
    }

    #[test]
    fn regenerated_particles_respect_ranges() {
        let mut field = ParticleField::new(MAX_PARTICLES);
        field.resize(900.0, 600.0);
        assert_eq!(field.len(), 60);

        for p in field.particles() {
            assert!((0.0..900.0).contains(&p.position.x));
            assert!((0.0..600.0).contains(&p.position.y));
            assert!(p.velocity.x.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.velocity.y.abs() <= PARTICLE_MAX_SPEED);
            assert!((PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE).contains(&p.size));
            assert!((PARTICLE_MIN_OPACITY..PARTICLE_MAX_OPACITY).contains(&p.opacity));
            assert!(PALETTE.iter().any(|c| c.r == p.color.r && c.g == p.color.g && c.b == p.color.b));
        }
    }

    #[test]
    fn resize_replaces_the_whole_set() {
        let mut field = ParticleField::new(MAX_PARTICLES);
        for width in [1920.0, 300.0, 0.0, 45.0, 1200.0] {
            field.resize(width, 500.0);
            assert!(field.len() <= MAX_PARTICLES);
            assert_eq!(field.len(), particle_count(width, MAX_PARTICLES));
        }
    }

    #[test]
    fn wrap_is_toroidal() {
        assert_eq!(wrap(105.0, 100.0), 5.0);
        assert_eq!(wrap(-5.0, 100.0), 95.0);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(42.0, 100.0), 42.0);
        assert_eq!(wrap(-1e-9, 100.0), 0.0);
        assert_eq!(wrap(12.0, 0.0), 0.0);
    }

    #[test]
    fn positions_stay_inside_viewport_while_moving() {
        let mut field = ParticleField::new(MAX_PARTICLES);
        field.resize(640.0, 360.0);

        for _ in 0..2_000 {
            field.update(FRAME_TIME * 7.0);
        }
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 360.0);
        }
    }

    #[test]
    fn update_moves_by_velocity() {
        let mut field = ParticleField::new(MAX_PARTICLES);
        field.resize(300.0, 300.0);
        field.particles[0] = Particle {
            position: Vector2::new(10.0, 290.0),
            velocity: Vector2::new(-6.0, 6.0),
            size: 2.0,
            opacity: 0.5,
            color: PALETTE[0],
        };

        field.update(1.0);
        let p = field.particles()[0];
        assert!((p.position.x - 4.0).abs() < 1e-4);
        assert!((p.position.y - 296.0).abs() < 1e-4);

        field.update(1.0);
        let p = field.particles()[0];
        assert!((p.position.x - 298.0).abs() < 1e-4);
        assert!((p.position.y - 2.0).abs() < 1e-4);
    }
}
