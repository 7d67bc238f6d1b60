//! Simulation state and its lifecycle
//!
//! Everything the tick mutates lives in [`SimulationState`]; nothing reaches
//! into globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::avatar::Avatar;
use super::collectible::{Collectible, CollectibleKind};
use super::effect::{self, Effect, EffectTint};
use super::entity::EntityIds;
use super::hostile::{Hostile, HostileKind};
use super::projectile::Projectile;
use super::starfield::Starfield;
use crate::Field;
use crate::consts::STAR_COUNT;
use crate::tuning::Tuning;

/// Notable things that happened during a tick, drained by the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    HostileDestroyed { kind: HostileKind, score: u64 },
    ShieldAbsorbed,
    LifeLost { lives: u8 },
    CollectiblePicked(CollectibleKind),
    LevelUp { level: u32 },
    /// Lives reached zero; emitted once per session
    AvatarDestroyed { score: u64, level: u32 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub field: Field,
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub avatar: Avatar,
    pub lives: u8,
    pub score: u64,
    pub level: u32,
    /// Ticks between hostile spawns at the current level
    pub hostile_spawn_interval: u32,
    pub hostile_spawn_counter: u32,
    pub collectible_spawn_counter: u32,
    pub projectiles: Vec<Projectile>,
    pub hostiles: Vec<Hostile>,
    pub collectibles: Vec<Collectible>,
    pub effects: Vec<Effect>,
    /// Background, kept across resets
    pub starfield: Starfield,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    pub ids: EntityIds,
}

impl SimulationState {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let field = Field::default();
        let starfield = Starfield::new(seed.rotate_left(32), &field, STAR_COUNT);
        Self {
            field,
            avatar: Avatar::new(&field, &tuning.avatar),
            lives: tuning.avatar.starting_lives,
            score: 0,
            level: 1,
            hostile_spawn_interval: tuning.progression.baseline_spawn_interval,
            hostile_spawn_counter: 0,
            collectible_spawn_counter: 0,
            projectiles: Vec::new(),
            hostiles: Vec::new(),
            collectibles: Vec::new(),
            effects: Vec::new(),
            starfield,
            events: Vec::new(),
            ids: EntityIds::default(),
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    /// Start a fresh session: new avatar, empty collections, baseline difficulty
    ///
    /// The RNG and starfield carry on so consecutive sessions differ.
    pub fn reset(&mut self) {
        self.avatar = Avatar::new(&self.field, &self.tuning.avatar);
        self.lives = self.tuning.avatar.starting_lives;
        self.score = 0;
        self.level = 1;
        self.hostile_spawn_interval = self.tuning.progression.baseline_spawn_interval;
        self.hostile_spawn_counter = 0;
        self.collectible_spawn_counter = 0;
        self.projectiles.clear();
        self.hostiles.clear();
        self.collectibles.clear();
        self.effects.clear();
        self.events.clear();
        self.ids = EntityIds::default();
        self.time_ticks = 0;
    }

    pub fn next_entity_id(&mut self) -> u32 {
        self.ids.allocate()
    }

    /// True once lives have run out this session
    pub fn avatar_destroyed(&self) -> bool {
        self.lives == 0
    }

    pub fn spawn_effects(&mut self, pos: Vec2, count: usize, tint: EffectTint) {
        effect::burst(&mut self.effects, &mut self.rng, pos, count, tint);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_baseline() {
        let state = SimulationState::new(1, Tuning::default());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.hostile_spawn_interval, 120);
        assert_eq!(state.starfield.stars.len(), STAR_COUNT);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = SimulationState::new(1, Tuning::default());
        state.score = 900;
        state.level = 3;
        state.lives = 1;
        state.hostile_spawn_interval = 40;
        state.hostile_spawn_counter = 17;
        let id = state.next_entity_id();
        state
            .hostiles
            .push(Hostile::new(id, HostileKind::Scout, Vec2::ZERO, Vec2::ZERO, 40.0, 60.0));
        state.spawn_effects(Vec2::ZERO, 10, EffectTint::Fire);
        state.avatar.upgrade_weapon(600);

        state.reset();

        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.hostile_spawn_interval, 120);
        assert_eq!(state.hostile_spawn_counter, 0);
        assert!(state.projectiles.is_empty());
        assert!(state.hostiles.is_empty());
        assert!(state.collectibles.is_empty());
        assert!(state.effects.is_empty());
        assert_eq!(state.avatar.weapon_tier(), 1);
    }
}
