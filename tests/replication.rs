//! End-to-end replication tests.
//!
//! These drive the in-process replicated host and verify that follower
//! pools converge with the authoritative pool under real steering,
//! including mid-session scene resets.

use fountain::cluster::{self, ClusterConfig};
use fountain::Steering;

fn busy_steering(frame: u32) -> Steering {
    Steering {
        turn: match frame % 7 {
            0..=2 => 1.0,
            3 => 0.05, // inside the deadzone on purpose
            _ => -0.6,
        },
        thrust: if frame % 2 == 0 { 0.9 } else { -0.9 },
        reset: frame == 45,
        quit: false,
    }
}

#[test]
fn followers_stay_in_lockstep() {
    let config = ClusterConfig {
        followers: 3,
        frames: 90,
        steer: busy_steering,
        ..ClusterConfig::default()
    };

    let report = cluster::run(&config).unwrap();

    assert_eq!(report.followers.len(), 3);
    assert!(!report.authoritative.is_empty());
    for pool in &report.followers {
        assert_eq!(pool.len(), report.authoritative.len());
        assert_eq!(*pool, report.authoritative);
    }
}

#[test]
fn pool_settles_at_spawn_rate_times_lifetime() {
    // 400/s at 1/60 s ticks floors to 6 spawns per tick, an effective
    // 360/s. With the 10 s lifetime the pool warms up to ~3600 once the
    // oldest particles start dying.
    let config = ClusterConfig {
        followers: 1,
        frames: 700,
        ..ClusterConfig::default()
    };

    let report = cluster::run(&config).unwrap();
    let size = report.authoritative.len();
    assert!(size > 3_500 && size < 4_100, "steady-state size {}", size);
}

#[test]
fn reset_drops_the_whole_pool() {
    // A reset on the last simulated frame leaves exactly one tick's quota.
    let config = ClusterConfig {
        followers: 1,
        frames: 60,
        steer: |frame| Steering {
            reset: frame == 59,
            ..Steering::default()
        },
        ..ClusterConfig::default()
    };

    let report = cluster::run(&config).unwrap();
    let quota = (400.0_f32 * (1.0 / 60.0)) as usize;
    assert_eq!(report.authoritative.len(), quota);
    assert_eq!(report.followers[0], report.authoritative);
}
