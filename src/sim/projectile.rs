//! Shots fired by the avatar or by hostiles

use std::collections::VecDeque;

use glam::Vec2;

use super::entity::Entity;
use crate::Field;
use crate::consts::TRAIL_LENGTH;

/// Who fired a projectile; decides which collision rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Player,
    Hostile,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    owner: Owner,
    /// Past positions, oldest first
    pub trail: VecDeque<Vec2>,
    /// Set when the projectile hit something or left the field
    pub spent: bool,
}

impl Projectile {
    pub fn new(id: u32, owner: Owner, pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            size,
            owner,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
            spent: false,
        }
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn is_hostile(&self) -> bool {
        self.owner == Owner::Hostile
    }
}

impl Entity for Projectile {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn vel(&self) -> Vec2 {
        self.vel
    }

    fn size(&self) -> f32 {
        self.size
    }

    /// Remember where we were, then move
    fn advance(&mut self) {
        self.trail.push_back(self.pos);
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
        self.pos += self.vel;
    }

    fn off_field(&self, field: &Field) -> bool {
        self.pos.x < 0.0 || self.pos.y < 0.0 || self.pos.x > field.width || self.pos.y > field.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_keeps_five_most_recent() {
        let mut shot = Projectile::new(1, Owner::Player, Vec2::new(100.0, 500.0), Vec2::new(0.0, -10.0), 8.0);
        for _ in 0..8 {
            shot.advance();
        }
        assert_eq!(shot.trail.len(), TRAIL_LENGTH);
        // Oldest surviving entry is the position before the 4th move
        assert_eq!(shot.trail.front().copied(), Some(Vec2::new(100.0, 470.0)));
        assert_eq!(shot.trail.back().copied(), Some(Vec2::new(100.0, 430.0)));
        assert_eq!(shot.pos, Vec2::new(100.0, 420.0));
    }

    #[test]
    fn test_off_field_edges() {
        let field = Field::default();
        let at = |x, y| Projectile::new(1, Owner::Hostile, Vec2::new(x, y), Vec2::ZERO, 10.0);
        assert!(!at(0.0, 0.0).off_field(&field));
        assert!(!at(field.width, field.height).off_field(&field));
        assert!(at(-0.1, 10.0).off_field(&field));
        assert!(at(10.0, field.height + 0.1).off_field(&field));
    }

    #[test]
    fn test_owner_is_fixed_at_creation() {
        let shot = Projectile::new(3, Owner::Hostile, Vec2::ZERO, Vec2::ZERO, 10.0);
        assert!(shot.is_hostile());
        assert_eq!(shot.owner(), Owner::Hostile);
    }
}
