//! # Fountain
//!
//! An interactive particle fountain that runs windowed on a desktop or as a
//! replicated simulation across several display instances, one of which is
//! authoritative per frame.
//!
//! The simulation core is small and deliberately total: a pool of point
//! masses under gravity and drag, spawned at a fixed rate and pruned when
//! their lifetime runs out. What makes the repository interesting is the
//! frame protocol around it: one role computes the per-frame
//! [`NavigationState`], broadcasts it as a fixed-size snapshot, and every
//! role (authoritative included) applies the identical deterministic update,
//! so all displays stay in lockstep without ever exchanging particles.
//!
//! ## Running
//!
//! ```text
//! cargo run --release                      # windowed demo
//! cargo run --release -- --replicas 3      # headless replicated session
//! ```
//!
//! Windowed controls: W/S or ↑/↓ move, A/D or ←/→ turn, Space resets the
//! scene, Escape quits.
//!
//! ## Layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`particle`] | Point-mass kinematics and derived color |
//! | [`system`] | The live pool: spawn, advance, prune, reset |
//! | [`state`] | The replicated `Pod` snapshot |
//! | [`protocol`] | Authoritative/follower ticks and the shared apply |
//! | [`host`] | Boundary traits: input axes, snapshot channel ends |
//! | [`time`] | Clock boundary |
//! | [`input`] | Desktop keyboard → steering |
//! | [`cluster`] | In-process replicated reference host |
//! | [`render`] | wgpu point-sprite sink |
//! | [`app`] | Windowed desktop host |
//! | [`error`] | Boundary error types |

pub mod app;
pub mod cluster;
pub mod error;
pub mod host;
pub mod input;
pub mod particle;
pub mod protocol;
pub mod render;
pub mod state;
pub mod system;
pub mod time;

pub use error::{ChannelError, HostError};
pub use host::{AxisInput, StatePublisher, StateReceiver, Steering};
pub use particle::Particle;
pub use protocol::Navigator;
pub use state::NavigationState;
pub use system::ParticleSystem;
pub use time::{Clock, ManualClock, RunClock};
