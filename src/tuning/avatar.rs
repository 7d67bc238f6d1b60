//! Gameplay tuning for the player's craft.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarTuning {
    /// Movement per tick while a direction is held.
    pub speed: f32,

    /// Collision diameter in pixels.
    pub size: f32,

    /// Lives at session start.
    pub starting_lives: u8,

    /// Extra-life pickups never raise lives above this.
    pub max_lives: u8,

    /// Player shot speed in pixels per tick.
    pub shot_speed: f32,

    /// Player shot diameter.
    pub shot_size: f32,

    /// Ticks a shield pickup lasts.
    pub shield_ticks: u32,

    /// Ticks a weapon upgrade lasts.
    pub weapon_ticks: u32,

    /// Shield ticks drained when a hostile shot is absorbed.
    pub shield_drain_shot: u32,

    /// Shield ticks drained when a rammed hostile is absorbed.
    pub shield_drain_ram: u32,

    /// Ticks the damage flash stays visible.
    pub damage_flash_ticks: u32,
}

impl Default for AvatarTuning {
    fn default() -> Self {
        Self {
            speed: 6.0,
            size: 40.0,
            starting_lives: 3,
            max_lives: 5,
            shot_speed: 10.0,
            shot_size: 8.0,
            shield_ticks: 300,
            weapon_ticks: 600,
            shield_drain_shot: 50,
            shield_drain_ram: 100,
            damage_flash_ticks: 10,
        }
    }
}
