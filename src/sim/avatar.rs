//! The player's craft

use glam::Vec2;

use super::entity::Entity;
use super::projectile::{Owner, Projectile};
use crate::Field;
use crate::tuning::AvatarTuning;

/// Highest weapon tier
pub const MAX_WEAPON_TIER: u8 = 3;

/// Directions held down for the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Unit-per-axis direction (not normalized: diagonals move faster)
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[derive(Debug, Clone)]
pub struct Avatar {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    shield_active: bool,
    shield_ticks: u32,
    weapon_tier: u8,
    weapon_ticks: u32,
    /// Ticks of red damage flash remaining
    pub damage_flash: u32,
    /// Thruster flicker phase (cosmetic)
    pub thruster_phase: f32,
}

impl Avatar {
    /// Fresh craft near the bottom centre of the field
    pub fn new(field: &Field, tuning: &AvatarTuning) -> Self {
        Self {
            pos: Vec2::new(field.width / 2.0, field.height - 50.0),
            size: tuning.size,
            speed: tuning.speed,
            shield_active: false,
            shield_ticks: 0,
            weapon_tier: 1,
            weapon_ticks: 0,
            damage_flash: 0,
            thruster_phase: 0.0,
        }
    }

    pub fn shield_active(&self) -> bool {
        self.shield_active
    }

    pub fn shield_ticks(&self) -> u32 {
        self.shield_ticks
    }

    pub fn weapon_tier(&self) -> u8 {
        self.weapon_tier
    }

    pub fn weapon_ticks(&self) -> u32 {
        self.weapon_ticks
    }

    /// Move by held directions, then clamp to the lower half of the field
    pub fn steer(&mut self, input: &TickInput, field: &Field) {
        self.pos += input.direction() * self.speed;
        let half = self.size / 2.0;
        self.pos.x = self.pos.x.clamp(half, field.width - half);
        self.pos.y = self.pos.y.clamp(field.height / 2.0, field.height - half);
        self.thruster_phase += 0.1;
    }

    /// Count down buffs and the damage flash by one tick
    pub fn tick_buffs(&mut self) {
        if self.shield_active {
            self.shield_ticks = self.shield_ticks.saturating_sub(1);
            if self.shield_ticks == 0 {
                self.shield_active = false;
            }
        }
        if self.weapon_tier > 1 {
            self.weapon_ticks = self.weapon_ticks.saturating_sub(1);
            if self.weapon_ticks == 0 {
                self.weapon_tier = 1;
            }
        }
        self.damage_flash = self.damage_flash.saturating_sub(1);
    }

    pub fn activate_shield(&mut self, ticks: u32) {
        self.shield_active = true;
        self.shield_ticks = ticks;
    }

    /// Raise the weapon tier (capped) and restart its timer
    pub fn upgrade_weapon(&mut self, ticks: u32) {
        self.weapon_tier = (self.weapon_tier + 1).min(MAX_WEAPON_TIER);
        self.weapon_ticks = ticks;
    }

    /// Drain shield time after absorbing a hit; the shield drops at zero
    pub fn drain_shield(&mut self, ticks: u32) {
        self.shield_ticks = self.shield_ticks.saturating_sub(ticks);
        if self.shield_ticks == 0 {
            self.shield_active = false;
        }
    }

    pub fn flash(&mut self, ticks: u32) {
        self.damage_flash = ticks;
    }

    /// Shots for the current weapon tier as (offset, velocity) pairs
    fn volley(&self, speed: f32) -> Vec<(Vec2, Vec2)> {
        let s = self.size;
        let nose = (Vec2::new(0.0, -s / 2.0), Vec2::new(0.0, -speed));
        match self.weapon_tier {
            1 => vec![nose],
            2 => vec![
                (Vec2::new(-s / 4.0, -s / 4.0), Vec2::new(-0.5, -speed)),
                (Vec2::new(s / 4.0, -s / 4.0), Vec2::new(0.5, -speed)),
            ],
            _ => vec![
                nose,
                (Vec2::new(-s / 3.0, -s / 4.0), Vec2::new(-1.0, -(speed - 1.0))),
                (Vec2::new(s / 3.0, -s / 4.0), Vec2::new(1.0, -(speed - 1.0))),
            ],
        }
    }

    /// Projectiles for one trigger pull; `next_id` supplies projectile IDs
    pub fn fire(&self, tuning: &AvatarTuning, mut next_id: impl FnMut() -> u32) -> Vec<Projectile> {
        self.volley(tuning.shot_speed)
            .into_iter()
            .map(|(offset, vel)| Projectile::new(next_id(), Owner::Player, self.pos + offset, vel, tuning.shot_size))
            .collect()
    }
}

impl Entity for Avatar {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn vel(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn advance(&mut self) {}

    /// Steering keeps the avatar inside the field
    fn off_field(&self, _field: &Field) -> bool {
        false
    }
}
