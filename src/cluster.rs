//! In-process replicated session: one authoritative role, N followers.
//!
//! This is the reference implementation of the multi-display configuration.
//! Each follower runs on its own thread with its own particle pool; the
//! authoritative thread computes the per-frame [`NavigationState`], fans the
//! snapshot out as fixed-size bytes, and everyone meets at a barrier before
//! the next frame. That is the write, barrier, read discipline a CAVE-style
//! display library enforces across its render processes.
//!
//! Followers stay in lockstep because they see the same snapshots and drive
//! their spawns from the same seed, which the authoritative role draws from
//! entropy once and hands to every follower at startup (the in-process
//! analogue of broadcasting it over the channel before the first barrier).
//! There is no shutdown message: dropping the authoritative end closes the
//! channel, and a disconnected receive is the followers' quit signal.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Barrier};
use std::thread;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{ChannelError, HostError};
use crate::host::{StatePublisher, StateReceiver, Steering};
use crate::particle::Particle;
use crate::protocol::Navigator;
use crate::state::{NavigationState, SNAPSHOT_SIZE};
use crate::system::ParticleSystem;
use crate::time::{Clock, ManualClock};

/// Snapshot bytes as they travel between roles.
type Snapshot = [u8; SNAPSHOT_SIZE];

/// Authoritative end: one sender per follower.
struct Broadcast {
    senders: Vec<SyncSender<Snapshot>>,
}

impl StatePublisher for Broadcast {
    fn publish(&mut self, state: &NavigationState) -> Result<(), ChannelError> {
        let bytes: Snapshot = bytemuck::cast(*state);
        for sender in &self.senders {
            sender.send(bytes).map_err(|_| ChannelError::Disconnected)?;
        }
        Ok(())
    }
}

/// Follower end of the broadcast.
struct Feed {
    receiver: Receiver<Snapshot>,
}

impl StateReceiver for Feed {
    fn receive(&mut self) -> Result<NavigationState, ChannelError> {
        let bytes = self
            .receiver
            .recv()
            .map_err(|_| ChannelError::Disconnected)?;
        NavigationState::from_bytes(&bytes)
    }
}

/// Configuration for a headless replicated session.
pub struct ClusterConfig {
    /// Number of follower threads.
    pub followers: usize,
    /// Frames to simulate before shutting down.
    pub frames: u32,
    /// Fixed clock step per frame, seconds.
    pub step: f64,
    /// Steering script, called once per frame on the authoritative role.
    pub steer: fn(u32) -> Steering,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            followers: 2,
            frames: 120,
            step: 1.0 / 60.0,
            steer: |_| Steering::default(),
        }
    }
}

/// Final pools of every role, for convergence checks.
pub struct ClusterReport {
    /// The authoritative pool at shutdown.
    pub authoritative: Vec<Particle>,
    /// Each follower's pool at shutdown, in spawn order.
    pub followers: Vec<Vec<Particle>>,
}

/// Run a replicated session to completion.
///
/// Per frame the authoritative role advances the clock, polls the steering
/// script, publishes the snapshot, applies the shared update, and waits at
/// the barrier; each follower receives, applies, and waits. The channel
/// guarantees a follower cannot pass `receive` without this frame's
/// snapshot, so nobody races ahead of the authoritative write.
pub fn run(config: &ClusterConfig) -> Result<ClusterReport, HostError> {
    let seed: u64 = rand::thread_rng().gen();
    let barrier = Arc::new(Barrier::new(config.followers + 1));

    let mut senders = Vec::with_capacity(config.followers);
    let mut handles = Vec::with_capacity(config.followers);
    for _ in 0..config.followers {
        let (sender, receiver) = sync_channel::<Snapshot>(1);
        senders.push(sender);

        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            let mut feed = Feed { receiver };
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut navigator = Navigator::new();
            let mut pool = ParticleSystem::new();
            while let Ok(state) = feed.receive() {
                navigator.adopt(state);
                navigator.apply(&mut pool, &mut rng);
                barrier.wait();
            }
            pool.iter().cloned().collect::<Vec<_>>()
        }));
    }

    let mut broadcast = Broadcast { senders };
    let mut clock = ManualClock::new();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut navigator = Navigator::new();
    let mut pool = ParticleSystem::new();

    for frame in 0..config.frames {
        clock.advance(config.step);
        let input = (config.steer)(frame);
        let snapshot = navigator.steer(clock.now(), &input);
        broadcast.publish(&snapshot)?;
        navigator.apply(&mut pool, &mut rng);
        barrier.wait();
        if input.quit {
            break;
        }
    }

    // Closing the channels is the shutdown signal.
    drop(broadcast);

    let followers = handles
        .into_iter()
        .map(|handle| handle.join().expect("follower thread panicked"))
        .collect();

    Ok(ClusterReport {
        authoritative: pool.iter().cloned().collect(),
        followers,
    })
}
