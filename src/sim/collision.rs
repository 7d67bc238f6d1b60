//! Circle-circle overlap tests
//!
//! Every body is a circle of radius `size / 2`. There is no swept test: a
//! fast body can pass through a thin one between two ticks.

use glam::Vec2;

use super::entity::Entity;

/// Overlap test on raw centers and diameters
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_size: f32, b_pos: Vec2, b_size: f32) -> bool {
    a_pos.distance(b_pos) < a_size / 2.0 + b_size / 2.0
}

/// True when two entities overlap
#[inline]
pub fn hits<A: Entity + ?Sized, B: Entity + ?Sized>(a: &A, b: &B) -> bool {
    circles_overlap(a.pos(), a.size(), b.pos(), b.size())
}
