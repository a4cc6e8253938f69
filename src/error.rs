//! Boundary error types.
//!
//! The simulation core is total; only the host boundary can fail. Channel
//! errors cover the snapshot broadcast, host errors cover event-loop and
//! replicated-session failures. GPU and window creation follow the
//! terminate-on-failure boundary contract instead of returning here.

use std::fmt;

/// Errors on the state distribution channel.
#[derive(Debug)]
pub enum ChannelError {
    /// The other end of the channel is gone. For a follower this is the
    /// shutdown signal, not a fault.
    Disconnected,
    /// A snapshot arrived with the wrong byte length.
    BadSnapshot(usize),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::Disconnected => write!(f, "state channel disconnected"),
            ChannelError::BadSnapshot(len) => write!(
                f,
                "bad state snapshot: got {} bytes, expected {}",
                len,
                crate::state::SNAPSHOT_SIZE
            ),
        }
    }
}

impl std::error::Error for ChannelError {}

/// Errors from running a host session.
#[derive(Debug)]
pub enum HostError {
    /// The windowing event loop could not be created or run.
    EventLoop(winit::error::EventLoopError),
    /// The authoritative role lost its distribution channel mid-session.
    Channel(ChannelError),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::EventLoop(e) => write!(f, "event loop failed: {}", e),
            HostError::Channel(e) => write!(f, "distribution channel failed: {}", e),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::EventLoop(e) => Some(e),
            HostError::Channel(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for HostError {
    fn from(e: winit::error::EventLoopError) -> Self {
        HostError::EventLoop(e)
    }
}

impl From<ChannelError> for HostError {
    fn from(e: ChannelError) -> Self {
        HostError::Channel(e)
    }
}
