//! The replicated per-frame navigation state.
//!
//! One authoritative process computes a `NavigationState` each tick and
//! broadcasts it verbatim; followers use the copy as-is. The struct is
//! `Pod` so the wire form is its exact in-memory bytes: a fixed-size
//! snapshot, not a serialization format.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::ChannelError;

/// Viewer position restored on scene reset.
pub const DEFAULT_POSITION: [f32; 3] = [0.0, 0.0, -5.0];

/// Size in bytes of one state snapshot on the distribution channel.
pub const SNAPSHOT_SIZE: usize = std::mem::size_of::<NavigationState>();

/// Per-frame state distributed from the authoritative role to followers.
///
/// Lifetime is one frame; the authoritative tick recomputes it from scratch.
/// `reset_scene` is a `u32` flag (0 or 1) because `bool` is not `Pod`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct NavigationState {
    /// Viewer position in the scene.
    pub position: [f32; 3],
    /// Viewer heading around the vertical axis, radians.
    pub yaw: f32,
    /// Seconds covered by this tick.
    pub time_delta: f32,
    /// 1 if the particle pool must be cleared this tick.
    pub reset_scene: u32,
    /// Particles to append this tick.
    pub particles_to_spawn: u32,
}

impl NavigationState {
    /// The snapshot as its wire bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Rebuild a snapshot from wire bytes.
    ///
    /// Reads unaligned, since channel buffers carry plain bytes. Fails only
    /// if the slice is not exactly [`SNAPSHOT_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ChannelError> {
        bytemuck::try_pod_read_unaligned(bytes)
            .map_err(|_| ChannelError::BadSnapshot(bytes.len()))
    }

    /// Viewer position as a vector.
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            position: DEFAULT_POSITION,
            yaw: 0.0,
            time_delta: 0.0,
            reset_scene: 0,
            particles_to_spawn: 0,
        }
    }
}
