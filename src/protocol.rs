//! The per-frame update protocol.
//!
//! Exactly one role is authoritative on any tick: it polls input, samples
//! the clock, and computes the canonical [`NavigationState`]. Followers
//! adopt the published snapshot verbatim. Both roles then run the same
//! deterministic apply step against their local particle pool, which is what
//! keeps every display instance's scene identical without ever shipping
//! particles over the wire.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

use crate::host::Steering;
use crate::state::{NavigationState, DEFAULT_POSITION};
use crate::system::ParticleSystem;

/// Particles spawned per second of simulated time.
pub const SPAWN_PER_SECOND: f32 = 400.0;
/// Yaw rate at full turn deflection, radians per second.
pub const ROTATION_PER_SECOND: f32 = PI / 2.0;
/// Analog axis values at or below this magnitude are ignored.
pub const AXIS_DEADZONE: f32 = 0.1;

/// Owns the navigation state and the clock sample that produced it.
///
/// `last_time` starts at 0.0, so the very first authoritative tick reads a
/// delta equal to the whole time since the host clock's epoch. That
/// anomalously large first frame is accepted behavior; the pool absorbs it
/// as one big spawn-and-advance step.
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavigationState,
    last_time: f64,
}

impl Navigator {
    /// Fresh navigator at the default pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current frame's state.
    #[inline]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Authoritative tick: fold one clock sample and one input poll into
    /// the next snapshot. Returns a copy for the publisher.
    ///
    /// A reset edge restores the default pose before this tick's steering
    /// is applied, so movement on a reset frame starts from the origin pose.
    pub fn steer(&mut self, now: f64, input: &Steering) -> NavigationState {
        if input.reset {
            self.state.reset_scene = 1;
            self.state.position = DEFAULT_POSITION;
            self.state.yaw = 0.0;
        }

        self.state.time_delta = (now - self.last_time) as f32;
        self.last_time = now;
        self.state.particles_to_spawn = (SPAWN_PER_SECOND * self.state.time_delta) as u32;

        let dt = self.state.time_delta;
        if input.turn.abs() > AXIS_DEADZONE {
            self.state.yaw += input.turn * ROTATION_PER_SECOND * dt;
        }
        if input.thrust.abs() > AXIS_DEADZONE {
            let heading = Vec3::new(self.state.yaw.sin(), 0.0, self.state.yaw.cos());
            let position = self.state.position() + heading * (input.thrust * dt);
            self.state.position = position.to_array();
        }

        self.state
    }

    /// Follower tick: take the published snapshot as-is.
    pub fn adopt(&mut self, state: NavigationState) {
        self.state = state;
    }

    /// The shared deterministic update, identical on every role.
    ///
    /// Clear on reset, spawn this tick's quota, advance, prune, then
    /// re-arm the reset flag for the next frame.
    pub fn apply<R: Rng>(&mut self, system: &mut ParticleSystem, rng: &mut R) {
        if self.state.reset_scene != 0 {
            system.reset();
        }
        system.spawn(self.state.particles_to_spawn, rng);
        system.advance(self.state.time_delta);
        self.state.reset_scene = 0;
    }
}
