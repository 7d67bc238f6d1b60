//! Cosmetic particles for explosions and feedback
//!
//! Effects never interact with gameplay; they only age and fade.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::collectible::CollectibleKind;
use crate::rand_between;

/// Maximum live effects; bursts beyond this are dropped
pub const MAX_EFFECTS: usize = 2048;

/// Lifespan of a freshly spawned effect
pub const FULL_LIFESPAN: f32 = 255.0;

/// Lifespan of hostile muzzle flashes
pub const MUZZLE_LIFESPAN: f32 = 100.0;

const GRAVITY: Vec2 = Vec2::new(0.0, 0.05);
const DAMPING: f32 = 0.98;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectShape {
    Circle,
    Square,
    Triangle,
}

/// Palette selector for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectTint {
    /// Orange/yellow explosion debris
    Fire,
    /// Bright yellow hit sparks and level-up confetti
    Spark,
    /// Red avatar damage
    Damage,
    /// Blue shield absorption
    Shield,
    /// Hostile muzzle flash
    Muzzle,
    /// Pickup burst in the collectible's colour
    Pickup(CollectibleKind),
}

#[derive(Debug, Clone)]
pub struct Effect {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub size: f32,
    pub initial_size: f32,
    /// Counts down from `FULL_LIFESPAN`; dead at zero
    pub lifespan: f32,
    pub decay: f32,
    pub shape: EffectShape,
    pub sparkle: bool,
    pub rotation: f32,
    pub spin: f32,
    /// Green channel jitter for fire debris, 0-1
    pub heat: f32,
    pub tint: EffectTint,
}

impl Effect {
    pub fn new<R: Rng>(rng: &mut R, pos: Vec2, tint: EffectTint) -> Self {
        let direction = Vec2::from_angle(rand_between(rng, 0.0, TAU));
        let size = rand_between(rng, 3.0, 8.0);
        let shape = match rng.random_range(0..3) {
            0 => EffectShape::Circle,
            1 => EffectShape::Square,
            _ => EffectShape::Triangle,
        };
        Self {
            pos,
            vel: direction * rand_between(rng, 1.0, 5.0),
            acc: GRAVITY,
            size,
            initial_size: size,
            lifespan: FULL_LIFESPAN,
            decay: rand_between(rng, 5.0, 10.0),
            shape,
            sparkle: rng.random::<f32>() > 0.7,
            rotation: rand_between(rng, 0.0, TAU),
            spin: rand_between(rng, -0.2, 0.2),
            heat: rng.random::<f32>(),
            tint,
        }
    }

    pub fn with_lifespan(mut self, lifespan: f32) -> Self {
        self.lifespan = lifespan.min(FULL_LIFESPAN);
        self
    }

    pub fn advance(&mut self) {
        self.vel += self.acc;
        self.pos += self.vel;
        self.vel *= DAMPING;
        self.lifespan = (self.lifespan - self.decay).max(0.0);
        self.rotation += self.spin;
        self.size = self.initial_size * self.lifespan / FULL_LIFESPAN;
    }

    pub fn is_dead(&self) -> bool {
        self.lifespan <= 0.0
    }

    /// Opacity 0-1 derived from remaining lifespan
    pub fn alpha(&self) -> f32 {
        self.lifespan / FULL_LIFESPAN
    }
}

/// Append up to `count` effects at `pos`, respecting `MAX_EFFECTS`
pub fn burst<R: Rng>(effects: &mut Vec<Effect>, rng: &mut R, pos: Vec2, count: usize, tint: EffectTint) {
    burst_with_lifespan(effects, rng, pos, count, tint, FULL_LIFESPAN);
}

pub fn burst_with_lifespan<R: Rng>(
    effects: &mut Vec<Effect>,
    rng: &mut R,
    pos: Vec2,
    count: usize,
    tint: EffectTint,
    lifespan: f32,
) {
    let room = MAX_EFFECTS.saturating_sub(effects.len());
    effects.extend((0..count.min(room)).map(|_| Effect::new(rng, pos, tint).with_lifespan(lifespan)));
}
