//! Gameplay tuning for enemy craft.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostileTuning {
    /// Smallest and largest spawn diameter.
    pub min_size: f32,
    pub max_size: f32,

    /// Horizontal drift range is `[-max_drift, max_drift)`.
    pub max_drift: f32,

    /// Slowest descent speed; the fastest is `base_max_descent + level * descent_per_level`.
    pub min_descent: f32,
    pub base_max_descent: f32,
    pub descent_per_level: f32,

    /// Fire cooldown range in ticks.
    pub min_cooldown: f32,
    pub max_cooldown: f32,

    /// Cooldown reset multiplier is `jitter_floor + rand(0, jitter_span)`.
    pub jitter_floor: f32,
    pub jitter_span: f32,

    /// Hostile shot speed in pixels per tick.
    pub shot_speed: f32,

    /// Hostile shot diameter.
    pub shot_size: f32,
}

impl Default for HostileTuning {
    fn default() -> Self {
        Self {
            min_size: 30.0,
            max_size: 50.0,
            max_drift: 1.0,
            min_descent: 1.0,
            base_max_descent: 3.0,
            descent_per_level: 0.5,
            min_cooldown: 60.0,
            max_cooldown: 120.0,
            jitter_floor: 0.8,
            jitter_span: 0.4,
            shot_speed: 5.0,
            shot_size: 10.0,
        }
    }
}
