//! Point-mass particles and their per-frame kinematics.
//!
//! A particle is position, velocity ("direction") and remaining lifetime.
//! Each tick it drifts along its direction, loses speed to drag, picks up
//! gravity, and burns lifetime. Color is derived from vertical speed, not
//! stored.

use glam::{Vec3, Vec4};

/// Seconds a freshly spawned particle lives.
pub const DEFAULT_LIFE: f32 = 10.0;

/// Constant downward acceleration.
const GRAVITY: Vec3 = Vec3::new(0.0, -1.0, 0.0);
/// Fraction of velocity shed per second.
const DRAG_PER_SECOND: f32 = 0.2;
/// Color of slow or sinking particles.
const COLD: Vec4 = Vec4::new(0.0, 0.73, 1.0, 1.0);
/// Color of particles still climbing.
const HOT: Vec4 = Vec4::new(0.8, 0.0, 0.0, 1.0);

/// One point mass in the fountain.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// World position.
    pub position: Vec3,
    /// Velocity, in world units per second.
    pub direction: Vec3,
    /// Seconds remaining before the particle is pruned.
    pub life: f32,
}

impl Particle {
    /// Create a particle with the default lifetime.
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
            life: DEFAULT_LIFE,
        }
    }

    /// Advance the particle by `time_delta` seconds.
    ///
    /// Explicit Euler: drift, then decay the velocity and add gravity,
    /// then burn lifetime. A zero delta is a no-op.
    pub fn update(&mut self, time_delta: f32) {
        self.position += self.direction * time_delta;
        self.direction =
            self.direction * (1.0 - time_delta * DRAG_PER_SECOND) + GRAVITY * time_delta;
        self.life -= time_delta;
    }

    /// Whether the particle should be pruned from the pool.
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Derived display color: cold→hot keyed by vertical speed.
    ///
    /// The interpolation factor is `direction.y / 2 + 1`, clamped to [0, 1],
    /// so anything rising at 0 or faster reads fully hot and anything
    /// falling at −2 or faster reads fully cold.
    pub fn color(&self) -> Vec4 {
        let factor = (self.direction.y / 2.0 + 1.0).clamp(0.0, 1.0);
        COLD.lerp(HOT, factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_decreases_by_delta() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::ZERO);
        p.update(0.25);
        assert!((p.life - (DEFAULT_LIFE - 0.25)).abs() < 1e-6);
        p.update(1.5);
        assert!((p.life - (DEFAULT_LIFE - 1.75)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut p = Particle::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, -0.5));
        let before = p.clone();
        p.update(0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn test_position_follows_direction() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        p.update(0.5);
        assert!((p.position.x - 1.0).abs() < 1e-6);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.position.z, 0.0);
    }

    #[test]
    fn test_gravity_pulls_direction_down() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::ZERO);
        p.update(1.0);
        assert!(p.direction.y < 0.0);
    }

    #[test]
    fn test_drag_decays_horizontal_speed() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        p.update(0.5);
        // 1.0 * (1 - 0.5 * 0.2) = 0.9, gravity only touches y
        assert!((p.direction.x - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_dead_at_and_below_zero() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::ZERO);
        assert!(!p.is_dead());
        p.life = 0.0;
        assert!(p.is_dead());
        p.life = -1.0;
        assert!(p.is_dead());
    }

    #[test]
    fn test_color_endpoints() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::new(0.0, -2.0, 0.0));
        assert!((p.color() - COLD).abs().max_element() < 1e-6);
        p.direction.y = 0.0;
        assert!((p.color() - HOT).abs().max_element() < 1e-6);
        // Beyond the endpoints the factor clamps
        p.direction.y = 4.0;
        assert!((p.color() - HOT).abs().max_element() < 1e-6);
        p.direction.y = -10.0;
        assert!((p.color() - COLD).abs().max_element() < 1e-6);
    }

    #[test]
    fn test_color_monotonic_in_vertical_speed() {
        // Red channel grows and blue channel shrinks as the particle
        // climbs faster across the whole interpolation domain.
        let mut p = Particle::new(Vec3::ZERO, Vec3::ZERO);
        let mut last = {
            p.direction.y = -2.0;
            p.color()
        };
        let mut y = -2.0 + 0.05;
        while y <= 0.0 {
            p.direction.y = y;
            let c = p.color();
            assert!(c.x >= last.x);
            assert!(c.z <= last.z);
            last = c;
            y += 0.05;
        }
    }
}
