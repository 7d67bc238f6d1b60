//! Gameplay tuning for falling power-ups.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectibleTuning {
    /// Ticks between periodic spawn rolls.
    pub spawn_interval: u32,

    /// Probability a periodic roll actually spawns a collectible.
    pub spawn_chance: f32,

    /// Probability a destroyed hostile drops a collectible.
    pub loot_drop_chance: f32,

    /// Pickup diameter.
    pub size: f32,

    /// Horizontal drift range is `[-max_drift, max_drift)`.
    pub max_drift: f32,

    /// Fall speed range in pixels per tick.
    pub min_fall: f32,
    pub max_fall: f32,

    /// Spawns stay inside this fraction of the field width from each edge.
    pub edge_margin: f32,
}

impl Default for CollectibleTuning {
    fn default() -> Self {
        Self {
            spawn_interval: 500,
            spawn_chance: 0.3,
            loot_drop_chance: 0.1,
            size: 20.0,
            max_drift: 0.5,
            min_fall: 1.0,
            max_fall: 2.0,
            edge_margin: 0.1,
        }
    }
}
