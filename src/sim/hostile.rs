//! Enemy craft

use glam::Vec2;
use rand::Rng;

use super::entity::Entity;
use super::projectile::{Owner, Projectile};
use crate::tuning::HostileTuning;
use crate::{Field, rand_between};

/// Hostile strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostileKind {
    Scout,
    Destroyer,
    Battleship,
}

impl HostileKind {
    pub const ALL: [HostileKind; 3] = [Self::Scout, Self::Destroyer, Self::Battleship];

    pub fn index(self) -> u8 {
        match self {
            HostileKind::Scout => 0,
            HostileKind::Destroyer => 1,
            HostileKind::Battleship => 2,
        }
    }

    /// Hits needed to destroy one
    pub fn max_health(self) -> u8 {
        self.index() + 1
    }

    /// Score awarded on destruction
    pub fn score_value(self) -> u64 {
        (self.index() as u64 + 1) * 10
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone)]
pub struct Hostile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub kind: HostileKind,
    health: u8,
    /// Base ticks between shots
    pub fire_cooldown: f32,
    /// Ticks until the next shot
    pub fire_timer: f32,
    /// Thruster flicker phase (cosmetic)
    pub thruster_phase: f32,
    /// Set when destroyed, rammed, or scrolled off the bottom
    pub removed: bool,
}

impl Hostile {
    pub fn new(id: u32, kind: HostileKind, pos: Vec2, vel: Vec2, size: f32, fire_cooldown: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            size,
            kind,
            health: kind.max_health(),
            fire_cooldown,
            fire_timer: fire_cooldown,
            thruster_phase: 0.0,
            removed: false,
        }
    }

    /// Random hostile entering just above the top edge
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, field: &Field, level: u32, tuning: &HostileTuning) -> Self {
        let max_descent = tuning.base_max_descent + level as f32 * tuning.descent_per_level;
        let pos = Vec2::new(rand_between(rng, 0.0, field.width), -20.0);
        let vel = Vec2::new(
            rand_between(rng, -tuning.max_drift, tuning.max_drift),
            rand_between(rng, tuning.min_descent, max_descent),
        );
        let size = rand_between(rng, tuning.min_size, tuning.max_size);
        let kind = HostileKind::random(rng);
        let cooldown = rand_between(rng, tuning.min_cooldown, tuning.max_cooldown);
        Self::new(id, kind, pos, vel, size, cooldown)
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        !self.removed
    }

    /// Apply one point of damage. Returns true if this destroyed the hostile.
    pub fn take_damage(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.removed = true;
        }
        self.health == 0
    }

    /// Count down the fire timer. Returns true when a shot is due and the
    /// hostile is inside the visible band.
    pub fn ready_to_fire(&mut self, field: &Field) -> bool {
        self.fire_timer -= 1.0;
        self.fire_timer <= 0.0 && self.pos.y > 0.0 && self.pos.y < field.height
    }

    /// Restart the fire timer with jitter
    pub fn reset_fire_timer<R: Rng>(&mut self, rng: &mut R, tuning: &HostileTuning) {
        let jitter = tuning.jitter_floor + rand_between(rng, 0.0, tuning.jitter_span);
        self.fire_timer = self.fire_cooldown * jitter;
    }

    /// Shot aimed at `target`
    pub fn aimed_shot(&self, id: u32, target: Vec2, tuning: &HostileTuning) -> Projectile {
        // Straight down if the target sits exactly on us
        let dir = (target - self.pos).try_normalize().unwrap_or(Vec2::Y);
        Projectile::new(id, Owner::Hostile, self.pos, dir * tuning.shot_speed, tuning.shot_size)
    }
}

impl Entity for Hostile {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn vel(&self) -> Vec2 {
        self.vel
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.thruster_phase += 0.1;
    }

    /// Hostiles only expire past the bottom edge
    fn off_field(&self, field: &Field) -> bool {
        self.pos.y > field.height + self.size
    }
}
