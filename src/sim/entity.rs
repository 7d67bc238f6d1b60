//! Shared capability set for everything that moves on the playfield

use glam::Vec2;

use crate::Field;

/// A moving circular body
///
/// `size` is a diameter; collisions treat every entity as a circle of
/// radius `size / 2`.
pub trait Entity {
    fn pos(&self) -> Vec2;
    fn vel(&self) -> Vec2;
    fn size(&self) -> f32;

    #[inline]
    fn radius(&self) -> f32 {
        self.size() / 2.0
    }

    /// Advance one tick of motion
    fn advance(&mut self);

    /// True once the entity has left the region it is allowed to live in
    fn off_field(&self, field: &Field) -> bool;
}

/// Sequential entity IDs, unique within a session
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}
