//! Difficulty curve and end-of-run thresholds.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionTuning {
    /// Level `n` ends once score reaches `n * level_up_score`.
    pub level_up_score: u64,

    /// Ticks between hostile spawns at level 1.
    pub baseline_spawn_interval: u32,

    /// Interval reduction per level.
    pub spawn_interval_step: u32,

    /// The interval never drops below this.
    pub spawn_interval_floor: u32,

    /// Runs must beat this score to be offered a leaderboard entry.
    pub name_prompt_min_score: u64,

    /// Delay between game over and the name prompt, in milliseconds.
    pub name_prompt_delay_ms: u64,
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            level_up_score: 500,
            baseline_spawn_interval: 120,
            spawn_interval_step: 10,
            spawn_interval_floor: 30,
            name_prompt_min_score: 100,
            name_prompt_delay_ms: 2000,
        }
    }
}
