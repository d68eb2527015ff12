/// Particle bursts: spawn a batch at a point, then decay them every tick.

use rand::Rng;

use crate::config::COLOR_PARTICLE;
use crate::entities::Particle;

/// Create `count` particles at (`x`, `y`) with random velocity, lifetime
/// and radius. A zero count yields an empty burst.
pub fn spawn_particles(x: f32, y: f32, count: usize, rng: &mut impl Rng) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x,
            y,
            vx: rng.gen_range(-50.0..=50.0),
            vy: rng.gen_range(-50.0..=50.0),
            life: rng.gen_range(0.5..=1.5),
            radius: rng.gen_range(2..=5),
            color: COLOR_PARTICLE,
        })
        .collect()
}

/// Age and move every particle, returning the survivors in order.
pub fn update_particles(particles: &[Particle], dt: f32) -> Vec<Particle> {
    particles
        .iter()
        .filter_map(|p| {
            let moved = Particle {
                x: p.x + p.vx * dt,
                y: p.y + p.vy * dt,
                life: p.life - dt,
                ..p.clone()
            };
            // Dead once life reaches zero, checked after the step
            if moved.life <= 0.0 {
                None
            } else {
                Some(moved)
            }
        })
        .collect()
}
