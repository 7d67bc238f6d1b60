//! Falling power-ups

use glam::Vec2;
use rand::Rng;

use super::entity::Entity;
use crate::tuning::CollectibleTuning;
use crate::{Field, rand_between};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectibleKind {
    Shield,
    WeaponUpgrade,
    ExtraLife,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] = [Self::Shield, Self::WeaponUpgrade, Self::ExtraLife];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub kind: CollectibleKind,
    /// Visual rotation (cosmetic)
    pub rotation: f32,
    pub spin: f32,
    /// Set when picked up or fallen off the field
    pub removed: bool,
}

impl Collectible {
    /// Random collectible entering above the top edge, away from the side walls
    pub fn spawn<R: Rng>(id: u32, rng: &mut R, field: &Field, tuning: &CollectibleTuning) -> Self {
        let margin = field.width * tuning.edge_margin;
        let pos = Vec2::new(rand_between(rng, margin, field.width - margin), -20.0);
        let kind = CollectibleKind::random(rng);
        Self::dropped_at(id, rng, pos, kind, tuning)
    }

    /// Collectible released at `pos`, e.g. from a destroyed hostile
    pub fn dropped_at<R: Rng>(
        id: u32,
        rng: &mut R,
        pos: Vec2,
        kind: CollectibleKind,
        tuning: &CollectibleTuning,
    ) -> Self {
        let vel = Vec2::new(
            rand_between(rng, -tuning.max_drift, tuning.max_drift),
            rand_between(rng, tuning.min_fall, tuning.max_fall),
        );
        Self {
            id,
            pos,
            vel,
            size: tuning.size,
            kind,
            rotation: 0.0,
            spin: rand_between(rng, -0.05, 0.05),
            removed: false,
        }
    }
}

impl Entity for Collectible {
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
        self.rotation += self.spin;
    }

    fn off_field(&self, field: &Field) -> bool {
        self.pos.y > field.height + self.size
    }
}
