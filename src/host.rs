//! Host boundary contracts.
//!
//! The core consumes a clock, an input source, and a distribution channel;
//! it exposes nothing but the particle pool to the rendering sink. Each of
//! those collaborators is host-owned, so each is a trait here with the
//! in-process implementations this repository ships. Cross-process ordering
//! (snapshot delivered before the display barrier releases) is the host's
//! guarantee; nothing in the core re-checks it.

use crate::error::ChannelError;
use crate::state::NavigationState;

/// Per-tick input, polled once by the authoritative role only.
///
/// Axes are in [-1, 1]; buttons are rising edges, true for exactly the tick
/// on which they were pressed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Steering {
    /// Turn axis: positive steers left (counter-clockwise yaw).
    pub turn: f32,
    /// Thrust axis: positive moves along the current heading.
    pub thrust: f32,
    /// Reset-scene button edge.
    pub reset: bool,
    /// Quit button edge.
    pub quit: bool,
}

/// Source of per-tick steering. One implementation per host platform.
pub trait AxisInput {
    /// Poll the device state for this tick.
    fn poll(&mut self) -> Steering;
}

/// Authoritative end of the state broadcast.
pub trait StatePublisher {
    /// Publish this tick's snapshot to every follower.
    fn publish(&mut self, state: &NavigationState) -> Result<(), ChannelError>;
}

/// Follower end of the state broadcast.
pub trait StateReceiver {
    /// Block until this tick's snapshot arrives.
    ///
    /// `Err(ChannelError::Disconnected)` is the shutdown signal: the
    /// authoritative role has left and the follower should too.
    fn receive(&mut self) -> Result<NavigationState, ChannelError>;
}

/// Single-slot in-process channel; both ends in one value.
///
/// The degenerate host where authoritative and follower are the same
/// process. Publishing overwrites the slot; receiving takes it.
#[derive(Debug, Default)]
pub struct LoopbackChannel {
    slot: Option<NavigationState>,
}

impl LoopbackChannel {
    /// Create an empty loopback channel.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatePublisher for LoopbackChannel {
    fn publish(&mut self, state: &NavigationState) -> Result<(), ChannelError> {
        self.slot = Some(*state);
        Ok(())
    }
}

impl StateReceiver for LoopbackChannel {
    fn receive(&mut self) -> Result<NavigationState, ChannelError> {
        self.slot.take().ok_or(ChannelError::Disconnected)
    }
}
