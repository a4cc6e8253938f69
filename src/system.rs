//! The particle pool: spawning, advancing, pruning.
//!
//! `ParticleSystem` owns every live [`Particle`]. It is unbounded in
//! principle but self-limiting: particles die after a fixed lifetime, so the
//! steady-state size settles near spawn-rate × lifetime. All operations are
//! total over in-memory state; there are no fallible paths here.

use glam::Vec3;
use rand::Rng;

use crate::particle::Particle;

/// An unordered collection of live particles.
#[derive(Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` new particles from the shared random stream.
    ///
    /// Positions are uniform in the unit cube. Directions are uniform in
    /// [-1, 1] per axis with the vertical axis remapped to [0, 4], biasing
    /// every particle upward out of the nozzle.
    pub fn spawn<R: Rng>(&mut self, count: u32, rng: &mut R) {
        self.particles.reserve(count as usize);
        for _ in 0..count {
            let position = Vec3::new(
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.0),
            );
            let direction = Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0f32) * 2.0 + 2.0,
                rng.gen_range(-1.0..1.0),
            );
            self.particles.push(Particle::new(position, direction));
        }
    }

    /// Advance every particle by `time_delta`, then drop the dead ones.
    ///
    /// Survivor order is not part of the contract.
    pub fn advance(&mut self, time_delta: f32) {
        for p in &mut self.particles {
            p.update(time_delta);
        }
        self.particles.retain(|p| !p.is_dead());
    }

    /// Unconditionally clear the pool.
    pub fn reset(&mut self) {
        self.particles.clear();
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the pool is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate the live particles. The render sink only ever reads.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::DEFAULT_LIFE;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn test_spawn_grows_pool_by_exactly_n() {
        let mut system = ParticleSystem::new();
        let mut rng = rng();
        system.spawn(40, &mut rng);
        assert_eq!(system.len(), 40);
        system.spawn(3, &mut rng);
        assert_eq!(system.len(), 43);
    }

    #[test]
    fn test_spawned_particles_start_in_unit_cube_biased_up() {
        let mut system = ParticleSystem::new();
        system.spawn(200, &mut rng());
        for p in system.iter() {
            assert!(p.position.min_element() >= 0.0);
            assert!(p.position.max_element() < 1.0);
            assert!(p.direction.y >= 0.0 && p.direction.y < 4.0);
            assert!(p.direction.x >= -1.0 && p.direction.x < 1.0);
            assert!(p.direction.z >= -1.0 && p.direction.z < 1.0);
            assert_eq!(p.life, DEFAULT_LIFE);
        }
    }

    #[test]
    fn test_advance_prunes_dead_particles() {
        let mut system = ParticleSystem::new();
        system.spawn(10, &mut rng());
        // Lifetime is 10 s; one big step kills everything.
        system.advance(DEFAULT_LIFE + 0.1);
        assert!(system.is_empty());
    }

    #[test]
    fn test_still_particle_survives_then_dies() {
        // A particle with zero direction only ages.
        let mut system = ParticleSystem::new();
        system.spawn(1, &mut rng());
        let mut lone = Particle::new(Vec3::ZERO, Vec3::ZERO);
        system.reset();
        system.particles.push(lone.clone());

        system.advance(5.0);
        assert_eq!(system.len(), 1);
        let survivor = system.iter().next().unwrap();
        assert!((survivor.life - 5.0).abs() < 1e-5);

        system.advance(6.0);
        assert!(system.is_empty());

        // The same trajectory directly: life goes to exactly -1.
        lone.update(5.0);
        lone.update(6.0);
        assert!((lone.life - (-1.0)).abs() < 1e-5);
    }

    #[test]
    fn test_reset_empties_any_pool() {
        let mut system = ParticleSystem::new();
        system.spawn(50, &mut rng());
        assert_eq!(system.len(), 50);
        system.reset();
        assert!(system.is_empty());
        system.advance(0.016);
        assert!(system.is_empty());
        // Resetting an empty pool is fine too.
        system.reset();
        assert!(system.is_empty());
    }

    #[test]
    fn test_same_seed_same_pool() {
        let mut a = ParticleSystem::new();
        let mut b = ParticleSystem::new();
        a.spawn(25, &mut SmallRng::seed_from_u64(99));
        b.spawn(25, &mut SmallRng::seed_from_u64(99));
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x == y));
    }
}
