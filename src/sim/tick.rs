//! Fixed timestep simulation tick
//!
//! Advances a session by exactly one tick in a fixed phase order. Removal is
//! mark-and-compact: an entity is flagged the moment it dies, every later
//! check in the phase skips it, and the collection is compacted when the
//! phase ends.

use glam::Vec2;
use rand::Rng;

use super::avatar::TickInput;
use super::collectible::{Collectible, CollectibleKind};
use super::collision::hits;
use super::effect::{self, EffectTint, MUZZLE_LIFESPAN};
use super::entity::Entity;
use super::hostile::Hostile;
use super::state::{GameEvent, SimulationState};

/// Frames between starfield top-ups during play
const STAR_REPLENISH_FRAMES: u64 = 90;
const STAR_REPLENISH_COUNT: usize = 3;

/// How something reached the avatar
#[derive(Debug, Clone, Copy)]
enum Impact {
    Shot,
    Ram { at: Vec2 },
}

/// Advance the simulation by one fixed timestep
pub fn tick(state: &mut SimulationState, input: &TickInput) {
    state.time_ticks += 1;

    spawn_phase(state);
    avatar_phase(state, input);
    projectile_phase(state);
    hostile_phase(state);
    collectible_phase(state);
    effect_phase(state);
    progression_phase(state);
}

/// Player trigger pull. Ignored once the avatar is destroyed.
pub fn fire(state: &mut SimulationState) {
    if state.avatar_destroyed() {
        return;
    }
    let SimulationState {
        avatar,
        tuning,
        ids,
        projectiles,
        ..
    } = state;
    projectiles.extend(avatar.fire(&tuning.avatar, || ids.allocate()));
}

/// Keep particles alive over a frozen scene (overlays drawn above play)
pub fn animate_frozen(state: &mut SimulationState) {
    effect_phase(state);
}

/// Scroll the background. During play the field slowly gains stars.
pub fn update_backdrop(state: &mut SimulationState, playing: bool) {
    let field = state.field;
    if playing && state.starfield.frame % STAR_REPLENISH_FRAMES == 0 {
        state.starfield.replenish(&field, STAR_REPLENISH_COUNT);
    }
    state.starfield.update(&field);
}

fn spawn_phase(state: &mut SimulationState) {
    state.hostile_spawn_counter += 1;
    if state.hostile_spawn_counter >= state.hostile_spawn_interval {
        state.hostile_spawn_counter = 0;
        let id = state.ids.allocate();
        let hostile = Hostile::spawn(id, &mut state.rng, &state.field, state.level, &state.tuning.hostile);
        log::debug!("Spawned {:?} #{} at x={:.0}", hostile.kind, id, hostile.pos.x);
        state.hostiles.push(hostile);
    }

    // The counter restarts whether or not the roll succeeds
    state.collectible_spawn_counter += 1;
    if state.collectible_spawn_counter >= state.tuning.collectible.spawn_interval {
        state.collectible_spawn_counter = 0;
        if state.rng.random::<f32>() < state.tuning.collectible.spawn_chance {
            let id = state.ids.allocate();
            let collectible = Collectible::spawn(id, &mut state.rng, &state.field, &state.tuning.collectible);
            state.collectibles.push(collectible);
        }
    }
}

fn avatar_phase(state: &mut SimulationState, input: &TickInput) {
    state.avatar.steer(input, &state.field);
    state.avatar.tick_buffs();
}

fn projectile_phase(state: &mut SimulationState) {
    for i in 0..state.projectiles.len() {
        let projectile = &mut state.projectiles[i];
        projectile.advance();
        if projectile.off_field(&state.field) {
            projectile.spent = true;
            continue;
        }

        if projectile.is_hostile() {
            if state.lives > 0 && hits(projectile, &state.avatar) {
                projectile.spent = true;
                let at = projectile.pos;
                state.spawn_effects(at, 10, EffectTint::Damage);
                strike_avatar(state, Impact::Shot);
            }
            continue;
        }

        // First live hostile in iteration order takes the hit
        let target = state
            .hostiles
            .iter()
            .position(|h| h.is_alive() && hits(&state.projectiles[i], h));
        if let Some(target) = target {
            state.projectiles[i].spent = true;
            let at = state.projectiles[i].pos;
            state.spawn_effects(at, 5, EffectTint::Spark);
            damage_hostile(state, target);
        }
    }

    state.projectiles.retain(|p| !p.spent);
    state.hostiles.retain(Hostile::is_alive);
}

fn hostile_phase(state: &mut SimulationState) {
    for i in 0..state.hostiles.len() {
        let armed = !state.avatar_destroyed();
        let hostile = &mut state.hostiles[i];
        hostile.advance();

        if hostile.ready_to_fire(&state.field) && armed {
            let shot = hostile.aimed_shot(state.ids.allocate(), state.avatar.pos, &state.tuning.hostile);
            hostile.reset_fire_timer(&mut state.rng, &state.tuning.hostile);
            effect::burst_with_lifespan(
                &mut state.effects,
                &mut state.rng,
                hostile.pos,
                5,
                EffectTint::Muzzle,
                MUZZLE_LIFESPAN,
            );
            state.projectiles.push(shot);
        }

        if armed && hits(hostile, &state.avatar) {
            hostile.removed = true;
            let at = hostile.pos;
            strike_avatar(state, Impact::Ram { at });
            continue;
        }

        if hostile.off_field(&state.field) {
            hostile.removed = true;
        }
    }

    state.hostiles.retain(Hostile::is_alive);
}

fn collectible_phase(state: &mut SimulationState) {
    let reachable = !state.avatar_destroyed();
    for i in 0..state.collectibles.len() {
        let collectible = &mut state.collectibles[i];
        collectible.advance();

        if reachable && hits(collectible, &state.avatar) {
            collectible.removed = true;
            let (kind, at) = (collectible.kind, collectible.pos);
            apply_collectible(state, kind);
            state.spawn_effects(at, 15, EffectTint::Pickup(kind));
            state.events.push(GameEvent::CollectiblePicked(kind));
        } else if collectible.off_field(&state.field) {
            collectible.removed = true;
        }
    }

    state.collectibles.retain(|c| !c.removed);
}

fn effect_phase(state: &mut SimulationState) {
    for effect in &mut state.effects {
        effect.advance();
    }
    state.effects.retain(|e| !e.is_dead());
}

/// At most one level per tick
fn progression_phase(state: &mut SimulationState) {
    let progression = state.tuning.progression;
    if progression.level_up_score == 0 {
        return;
    }
    let threshold = u64::from(state.level.max(1)) * progression.level_up_score;
    if state.score < threshold {
        return;
    }

    state.level += 1;
    state.hostile_spawn_interval = state
        .hostile_spawn_interval
        .saturating_sub(progression.spawn_interval_step)
        .max(progression.spawn_interval_floor);
    let center = state.field.center();
    state.spawn_effects(center, 30, EffectTint::Spark);
    state.events.push(GameEvent::LevelUp { level: state.level });
    log::info!(
        "Level {} reached at score {} (spawn interval {})",
        state.level,
        state.score,
        state.hostile_spawn_interval
    );
}

/// One point of damage to `state.hostiles[idx]`, paying out if it dies
fn damage_hostile(state: &mut SimulationState, idx: usize) {
    if !state.hostiles[idx].take_damage() {
        return;
    }
    let (pos, kind) = (state.hostiles[idx].pos, state.hostiles[idx].kind);
    state.spawn_effects(pos, 20, EffectTint::Fire);
    let score = kind.score_value();
    state.score += score;
    state.events.push(GameEvent::HostileDestroyed { kind, score });

    if state.rng.random::<f32>() < state.tuning.collectible.loot_drop_chance {
        let id = state.ids.allocate();
        let loot = CollectibleKind::random(&mut state.rng);
        let drop = Collectible::dropped_at(id, &mut state.rng, pos, loot, &state.tuning.collectible);
        state.collectibles.push(drop);
    }
}

fn strike_avatar(state: &mut SimulationState, impact: Impact) {
    let tuning = state.tuning.avatar;

    if state.avatar.shield_active() {
        match impact {
            Impact::Shot => {
                state.avatar.drain_shield(tuning.shield_drain_shot);
                let at = state.avatar.pos;
                state.spawn_effects(at, 8, EffectTint::Shield);
            }
            Impact::Ram { at } => {
                state.avatar.drain_shield(tuning.shield_drain_ram);
                state.spawn_effects(at, 15, EffectTint::Shield);
            }
        }
        state.events.push(GameEvent::ShieldAbsorbed);
        return;
    }

    state.lives = state.lives.saturating_sub(1);
    match impact {
        Impact::Shot => {
            let at = state.avatar.pos;
            state.spawn_effects(at, 15, EffectTint::Fire);
            state.avatar.flash(tuning.damage_flash_ticks);
        }
        Impact::Ram { .. } => {
            let at = state.avatar.pos;
            state.spawn_effects(at, 20, EffectTint::Fire);
        }
    }
    state.events.push(GameEvent::LifeLost { lives: state.lives });

    if state.lives == 0 {
        let at = state.avatar.pos;
        state.spawn_effects(at, 30, EffectTint::Fire);
        state.events.push(GameEvent::AvatarDestroyed {
            score: state.score,
            level: state.level,
        });
        log::info!("Avatar destroyed: score {} at level {}", state.score, state.level);
    }
}

fn apply_collectible(state: &mut SimulationState, kind: CollectibleKind) {
    let tuning = state.tuning.avatar;
    match kind {
        CollectibleKind::Shield => state.avatar.activate_shield(tuning.shield_ticks),
        CollectibleKind::WeaponUpgrade => state.avatar.upgrade_weapon(tuning.weapon_ticks),
        CollectibleKind::ExtraLife => {
            if state.lives < tuning.max_lives {
                state.lives += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::sim::hostile::HostileKind;
    use crate::sim::projectile::{Owner, Projectile};
    use crate::tuning::Tuning;

    /// No timed spawns and no loot, so tests control every entity
    fn quiet_state() -> SimulationState {
        let mut tuning = Tuning::default();
        tuning.progression.baseline_spawn_interval = u32::MAX;
        tuning.collectible.spawn_interval = u32::MAX;
        tuning.collectible.loot_drop_chance = 0.0;
        SimulationState::new(42, tuning)
    }

    fn idle() -> TickInput {
        TickInput::default()
    }

    /// Stationary hostile that will not fire for a long time
    fn parked_hostile(state: &mut SimulationState, kind: HostileKind, pos: Vec2) -> u32 {
        let id = state.next_entity_id();
        state
            .hostiles
            .push(Hostile::new(id, kind, pos, Vec2::ZERO, 40.0, 1.0e6));
        id
    }

    fn parked_shot(state: &mut SimulationState, owner: Owner, pos: Vec2) {
        let id = state.next_entity_id();
        state.projectiles.push(Projectile::new(id, owner, pos, Vec2::ZERO, 8.0));
    }

    fn parked_collectible(state: &mut SimulationState, kind: CollectibleKind) {
        let id = state.next_entity_id();
        let at = state.avatar.pos;
        let mut collectible = Collectible::dropped_at(id, &mut state.rng, at, kind, &state.tuning.collectible);
        collectible.vel = Vec2::ZERO;
        state.collectibles.push(collectible);
    }

    #[test]
    fn test_health_hits_destroy_hostile() {
        let mut state = quiet_state();
        let at = Vec2::new(400.0, 100.0);
        parked_hostile(&mut state, HostileKind::Battleship, at);

        for expected in [2, 1] {
            parked_shot(&mut state, Owner::Player, at);
            tick(&mut state, &idle());
            assert_eq!(state.hostiles[0].health(), expected);
            assert_eq!(state.score, 0);
        }

        parked_shot(&mut state, Owner::Player, at);
        tick(&mut state, &idle());
        assert!(state.hostiles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 30);
        assert!(state.drain_events().contains(&GameEvent::HostileDestroyed {
            kind: HostileKind::Battleship,
            score: 30
        }));
    }

    #[test]
    fn test_projectile_hits_at_most_one_hostile() {
        let mut state = quiet_state();
        let at = Vec2::new(400.0, 100.0);
        let first = parked_hostile(&mut state, HostileKind::Scout, at);
        let second = parked_hostile(&mut state, HostileKind::Scout, at);
        parked_shot(&mut state, Owner::Player, at);

        tick(&mut state, &idle());

        assert_eq!(state.score, 10);
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostiles[0].id, second);
        assert_ne!(state.hostiles[0].id, first);
    }

    #[test]
    fn test_player_shots_ignore_avatar() {
        let mut state = quiet_state();
        let at = state.avatar.pos;
        parked_shot(&mut state, Owner::Player, at);
        tick(&mut state, &idle());
        assert_eq!(state.lives, 3);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_shield_absorbs_hostile_shot() {
        let mut state = quiet_state();
        state.avatar.activate_shield(300);
        let at = state.avatar.pos;
        parked_shot(&mut state, Owner::Hostile, at);

        tick(&mut state, &idle());

        assert_eq!(state.lives, 3);
        assert!(state.projectiles.is_empty());
        // One tick of decay, then the drain
        assert_eq!(state.avatar.shield_ticks(), 249);
        assert!(state.drain_events().contains(&GameEvent::ShieldAbsorbed));
    }

    #[test]
    fn test_shield_drops_when_drained_to_zero() {
        let mut state = quiet_state();
        state.avatar.activate_shield(30);
        let at = state.avatar.pos;
        parked_shot(&mut state, Owner::Hostile, at);
        tick(&mut state, &idle());
        assert!(!state.avatar.shield_active());
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_unshielded_hit_costs_a_life_and_flashes() {
        let mut state = quiet_state();
        let at = state.avatar.pos;
        parked_shot(&mut state, Owner::Hostile, at);
        tick(&mut state, &idle());
        assert_eq!(state.lives, 2);
        assert_eq!(state.avatar.damage_flash, 10);
        assert!(state.drain_events().contains(&GameEvent::LifeLost { lives: 2 }));
    }

    #[test]
    fn test_last_life_destroys_avatar_once() {
        let mut state = quiet_state();
        state.lives = 1;
        state.score = 150;
        let at = state.avatar.pos;
        parked_shot(&mut state, Owner::Hostile, at);

        tick(&mut state, &idle());
        assert_eq!(state.lives, 0);
        assert!(state.avatar_destroyed());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::AvatarDestroyed { score: 150, level: 1 }));

        // Nothing can hurt a destroyed avatar
        parked_shot(&mut state, Owner::Hostile, at);
        tick(&mut state, &idle());
        assert_eq!(state.lives, 0);
        assert!(
            !state
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::AvatarDestroyed { .. }))
        );
    }

    #[test]
    fn test_ram_with_shield() {
        let mut state = quiet_state();
        state.avatar.activate_shield(300);
        let at = state.avatar.pos;
        parked_hostile(&mut state, HostileKind::Destroyer, at);

        tick(&mut state, &idle());

        assert!(state.hostiles.is_empty());
        assert_eq!(state.lives, 3);
        assert_eq!(state.avatar.shield_ticks(), 199);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_ram_without_shield() {
        let mut state = quiet_state();
        let at = state.avatar.pos;
        parked_hostile(&mut state, HostileKind::Scout, at);

        tick(&mut state, &idle());

        assert!(state.hostiles.is_empty());
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_extra_life_is_capped() {
        let mut state = quiet_state();
        state.lives = 5;
        parked_collectible(&mut state, CollectibleKind::ExtraLife);
        tick(&mut state, &idle());
        assert_eq!(state.lives, 5);
        assert!(state.collectibles.is_empty());

        state.lives = 4;
        parked_collectible(&mut state, CollectibleKind::ExtraLife);
        tick(&mut state, &idle());
        assert_eq!(state.lives, 5);
    }

    #[test]
    fn test_weapon_upgrade_at_ceiling_resets_duration() {
        let mut state = quiet_state();
        state.avatar.upgrade_weapon(600);
        state.avatar.upgrade_weapon(600);
        for _ in 0..100 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.avatar.weapon_tier(), 3);
        assert_eq!(state.avatar.weapon_ticks(), 500);

        parked_collectible(&mut state, CollectibleKind::WeaponUpgrade);
        tick(&mut state, &idle());
        assert_eq!(state.avatar.weapon_tier(), 3);
        assert_eq!(state.avatar.weapon_ticks(), 600);
    }

    #[test]
    fn test_shield_pickup_activates_shield() {
        let mut state = quiet_state();
        parked_collectible(&mut state, CollectibleKind::Shield);
        tick(&mut state, &idle());
        assert!(state.avatar.shield_active());
        assert_eq!(state.avatar.shield_ticks(), 300);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::CollectiblePicked(CollectibleKind::Shield))
        );
    }

    #[test]
    fn test_level_up_tightens_spawn_interval_to_floor() {
        let mut state = SimulationState::new(3, Tuning::default());
        state.score = 500;
        tick(&mut state, &idle());
        assert_eq!(state.level, 2);
        assert_eq!(state.hostile_spawn_interval, 110);

        // One level per tick, interval never below the floor
        state.score = 1_000_000;
        for _ in 0..20 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.level, 22);
        assert_eq!(state.hostile_spawn_interval, 30);
    }

    #[test]
    fn test_hostile_spawn_cadence() {
        let mut state = SimulationState::new(5, Tuning::default());
        for _ in 0..119 {
            tick(&mut state, &idle());
        }
        assert!(state.hostiles.is_empty());
        tick(&mut state, &idle());
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostile_spawn_counter, 0);
    }

    #[test]
    fn test_collectible_counter_resets_without_spawn() {
        let mut tuning = Tuning::default();
        tuning.collectible.spawn_interval = 5;
        tuning.collectible.spawn_chance = 0.0;
        let mut state = SimulationState::new(5, tuning);
        for _ in 0..5 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.collectible_spawn_counter, 0);
        assert!(state.collectibles.is_empty());
        tick(&mut state, &idle());
        assert_eq!(state.collectible_spawn_counter, 1);
    }

    #[test]
    fn test_certain_collectible_spawn() {
        let mut tuning = Tuning::default();
        tuning.collectible.spawn_interval = 5;
        tuning.collectible.spawn_chance = 1.0;
        let mut state = SimulationState::new(5, tuning);
        for _ in 0..5 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.collectibles.len(), 1);
    }

    #[test]
    fn test_hostile_fires_aimed_shot() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        let at = Vec2::new(400.0, 100.0);
        state
            .hostiles
            .push(Hostile::new(id, HostileKind::Scout, at, Vec2::ZERO, 40.0, 1.0));

        tick(&mut state, &idle());

        assert_eq!(state.projectiles.len(), 1);
        let shot = &state.projectiles[0];
        assert!(shot.is_hostile());
        assert!(shot.vel.y > 0.0);
        assert!((shot.vel.length() - 5.0).abs() < 1e-4);
        assert_eq!(state.effects.len(), 5);
        assert!(state.hostiles[0].fire_timer > 0.0);
    }

    #[test]
    fn test_hostiles_hold_fire_above_field() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        state.hostiles.push(Hostile::new(
            id,
            HostileKind::Scout,
            Vec2::new(400.0, -20.0),
            Vec2::ZERO,
            40.0,
            1.0,
        ));
        tick(&mut state, &idle());
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_fire_patterns() {
        let mut state = quiet_state();
        fire(&mut state);
        assert_eq!(state.projectiles.len(), 1);
        state.avatar.upgrade_weapon(600);
        fire(&mut state);
        assert_eq!(state.projectiles.len(), 3);
        state.avatar.upgrade_weapon(600);
        fire(&mut state);
        assert_eq!(state.projectiles.len(), 6);
        assert!(state.projectiles.iter().all(|p| p.owner() == Owner::Player));
    }

    #[test]
    fn test_fire_ignored_when_destroyed() {
        let mut state = quiet_state();
        state.lives = 0;
        fire(&mut state);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_projectiles_leave_field() {
        let mut state = quiet_state();
        fire(&mut state);
        for _ in 0..60 {
            tick(&mut state, &idle());
        }
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_hostiles_leave_past_bottom() {
        let mut state = quiet_state();
        let id = state.next_entity_id();
        let y = state.field.height + 40.0 - 0.5;
        state.hostiles.push(Hostile::new(
            id,
            HostileKind::Scout,
            Vec2::new(100.0, y),
            Vec2::new(0.0, 1.0),
            40.0,
            1.0e6,
        ));
        tick(&mut state, &idle());
        assert!(state.hostiles.is_empty());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
    }

    /// Every effect of `tint` still sits within one tick of drift from `origin`
    fn effects_near(state: &SimulationState, tint: EffectTint, origin: Vec2) -> bool {
        let matching: Vec<_> = state.effects.iter().filter(|e| e.tint == tint).collect();
        !matching.is_empty() && matching.iter().all(|e| e.pos.distance(origin) < 6.0)
    }

    #[test]
    fn test_shot_damage_sparks_at_impact_point() {
        let mut state = quiet_state();
        let at = state.avatar.pos + Vec2::new(15.0, 0.0);
        parked_shot(&mut state, Owner::Hostile, at);
        tick(&mut state, &idle());
        assert_eq!(state.lives, 2);
        assert!(effects_near(&state, EffectTint::Damage, at));
    }

    #[test]
    fn test_ram_explosion_at_avatar() {
        let mut state = quiet_state();
        let avatar = state.avatar.pos;
        parked_hostile(&mut state, HostileKind::Scout, avatar + Vec2::new(0.0, -25.0));
        tick(&mut state, &idle());
        assert_eq!(state.lives, 2);
        assert!(effects_near(&state, EffectTint::Fire, avatar));
    }

    #[test]
    fn test_animate_frozen_only_touches_effects() {
        let mut state = quiet_state();
        let at = Vec2::new(400.0, 100.0);
        parked_hostile(&mut state, HostileKind::Scout, at);
        state.spawn_effects(at, 10, EffectTint::Fire);
        let before = state.effects[0].lifespan;

        animate_frozen(&mut state);

        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.hostiles[0].pos, at);
        assert!(state.effects[0].lifespan < before);
    }

    #[test]
    fn test_backdrop_grows_only_during_play() {
        let mut state = quiet_state();
        let count = state.starfield.stars.len();
        update_backdrop(&mut state, false);
        assert_eq!(state.starfield.stars.len(), count);

        let mut state = quiet_state();
        update_backdrop(&mut state, true);
        assert_eq!(state.starfield.stars.len(), count + STAR_REPLENISH_COUNT);
    }

    fn scripted_run(seed: u64, ticks: u32) -> SimulationState {
        let mut state = SimulationState::new(seed, Tuning::default());
        for t in 0..ticks {
            let input = TickInput {
                left: (t / 90) % 2 == 0,
                right: (t / 90) % 2 == 1,
                ..Default::default()
            };
            if t % 8 == 0 {
                fire(&mut state);
            }
            tick(&mut state, &input);
        }
        state
    }

    #[test]
    fn test_same_seed_same_run() {
        let a = scripted_run(99, 1500);
        let b = scripted_run(99, 1500);
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.level, b.level);
        assert_eq!(format!("{:?}", a.hostiles), format!("{:?}", b.hostiles));
        assert_eq!(format!("{:?}", a.projectiles), format!("{:?}", b.projectiles));
        assert_eq!(a.effects.len(), b.effects.len());
    }

    #[test]
    fn test_long_run_invariants() {
        let mut state = SimulationState::new(7, Tuning::default());
        let mut health: HashMap<u32, u8> = HashMap::new();
        let (mut score, mut level) = (0, 1);

        for t in 0..4000u32 {
            if t % 6 == 0 {
                fire(&mut state);
            }
            let input = TickInput {
                left: (t / 120) % 2 == 0,
                right: (t / 120) % 2 == 1,
                ..Default::default()
            };
            tick(&mut state, &input);

            assert!(state.score >= score);
            assert!(state.level >= level);
            score = state.score;
            level = state.level;

            assert!((1..=3).contains(&state.avatar.weapon_tier()));
            assert!(state.lives <= state.tuning.avatar.max_lives);
            assert!(state.effects.len() <= effect::MAX_EFFECTS);
            assert!(state.effects.iter().all(|e| !e.is_dead()));
            assert!(state.projectiles.iter().all(|p| !p.spent));
            assert!(state.collectibles.iter().all(|c| !c.removed));
            for hostile in &state.hostiles {
                assert!(hostile.is_alive());
                assert!(hostile.health() > 0);
                if let Some(previous) = health.insert(hostile.id, hostile.health()) {
                    assert!(hostile.health() <= previous);
                }
            }
            assert!(state.projectiles.iter().all(|p| p.trail.len() <= crate::consts::TRAIL_LENGTH));
        }
        assert!(state.time_ticks == 4000);
    }
}
