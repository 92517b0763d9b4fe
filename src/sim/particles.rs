//! Feedback particles
//!
//! Bursts on passes and deaths. Particles live a fixed number of ticks and
//! keep animating in every phase. There is no cap; bursts are small and
//! short-lived.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;
use crate::tuning::Tuning;

/// Push `count` particles at `pos` with random velocity and size
pub fn spawn_particles<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    pos: Vec2,
    color: u32,
    count: usize,
    tuning: &Tuning,
    rng: &mut R,
) {
    particles.reserve(count);
    for _ in 0..count {
        let vx = (rng.random::<f32>() - 0.5) * 6.0;
        // Slight upward bias so bursts fountain before falling
        let vy = (rng.random::<f32>() - 0.5) * 6.0 - 1.0;
        particles.push(Particle {
            pos,
            vel: Vec2::new(vx, vy),
            radius: rng.random::<f32>() * 3.5 + 1.0,
            life: tuning.particle_lifetime,
            max_life: tuning.particle_lifetime,
            color,
        });
    }
}

/// Integrate one tick and purge exhausted particles
pub fn tick_particles(particles: &mut Vec<Particle>, tuning: &Tuning) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel *= tuning.particle_friction;
        particle.vel.y += tuning.particle_gravity;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLOR_SUCCESS;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_bounds() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut particles = Vec::new();
        spawn_particles(
            &mut particles,
            Vec2::new(110.0, 300.0),
            COLOR_SUCCESS,
            100,
            &tuning,
            &mut rng,
        );

        assert_eq!(particles.len(), 100);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(110.0, 300.0));
            assert!(p.vel.x >= -3.0 && p.vel.x <= 3.0);
            assert!(p.vel.y >= -4.0 && p.vel.y <= 2.0);
            assert!(p.radius >= 1.0 && p.radius <= 4.5);
            assert_eq!(p.life, tuning.particle_lifetime);
            assert_eq!(p.color, COLOR_SUCCESS);
        }
    }

    #[test]
    fn test_tick_integrates_then_decays() {
        let tuning = Tuning::default();
        let mut particles = vec![Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::new(2.0, -1.0),
            radius: 2.0,
            life: 5,
            max_life: 5,
            color: 0,
        }];

        tick_particles(&mut particles, &tuning);

        let p = &particles[0];
        assert_eq!(p.pos, Vec2::new(12.0, 9.0));
        assert!((p.vel.x - 1.86).abs() < 1e-5);
        assert!((p.vel.y - (-0.93 + 0.1)).abs() < 1e-5);
        assert_eq!(p.life, 4);
    }

    #[test]
    fn test_particles_vanish_exactly_at_lifetime() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(12);
        let mut particles = Vec::new();
        spawn_particles(&mut particles, Vec2::ZERO, 0, 24, &tuning, &mut rng);

        let lifetime = tuning.particle_lifetime;
        for k in 1..=lifetime + 5 {
            tick_particles(&mut particles, &tuning);
            let expected = if k < lifetime { 24 } else { 0 };
            assert_eq!(particles.len(), expected, "after {} ticks", k);
        }
    }
}
