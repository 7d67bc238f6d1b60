//! Void Patrol - an arcade space shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, spawning, difficulty)
//! - `session`: Screen state machine, input routing, name entry
//! - `leaderboard`: Remote high-score store boundary and clients
//! - `runtime`: Async glue between the session and the leaderboard service
//! - `renderer`: Drawing boundary consumed by the host
//! - `settings` / `tuning`: Configuration and data-driven game balance

pub mod leaderboard;
pub mod renderer;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use leaderboard::{LeaderboardCache, LeaderboardEntry, LeaderboardService, ServiceError};
pub use session::{InputEvent, Key, Screen, SessionController};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Simulation ticks per second; all velocities are in units/tick
    pub const TICK_RATE: u32 = 60;
    /// Wall-clock length of one tick
    pub const TICK_DURATION: Duration = Duration::from_micros(1_000_000 / TICK_RATE as u64);

    /// Number of past positions a projectile remembers
    pub const TRAIL_LENGTH: usize = 5;

    /// Background star count
    pub const STAR_COUNT: usize = 200;
}

/// Visible playfield bounds. Origin is top-left, +y points down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: consts::FIELD_WIDTH,
            height: consts::FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Uniform draw in `[lo, hi)`, collapsing to `lo` when the range is empty
#[inline]
pub fn rand_between<R: rand::Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}
