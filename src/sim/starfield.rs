//! Parallax background stars
//!
//! Purely decorative. Stars drift down on every screen, not just during play.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::{Field, rand_between};

/// Replenishing stops once the field holds this many stars
pub const MAX_STARS: usize = 400;

const MIN_DEPTH: f32 = 0.1;
const MAX_DEPTH: f32 = 3.0;

/// Linear remap of `v` from `[a0, a1]` to `[b0, b1]`
fn remap(v: f32, a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    b0 + (v - a0) / (a1 - a0) * (b1 - b0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarHue {
    BlueWhite,
    Yellow,
    Orange,
    RedDwarf,
    Bluish,
}

#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub prev_pos: Vec2,
    /// Parallax depth, 0.1 (far) to 3 (near)
    pub depth: f32,
    pub size: f32,
    pub speed: f32,
    pub brightness: f32,
    pub twinkle_speed: f32,
    pub twinkle_amount: f32,
    pub twinkle_offset: f32,
    pub bright: bool,
    pub hue: StarHue,
}

impl Star {
    fn new<R: Rng>(rng: &mut R, field: &Field) -> Self {
        let hue = match rng.random_range(0..5) {
            0 => StarHue::BlueWhite,
            1 => StarHue::Yellow,
            2 => StarHue::Orange,
            3 => StarHue::RedDwarf,
            _ => StarHue::Bluish,
        };
        let mut star = Self {
            pos: Vec2::ZERO,
            prev_pos: Vec2::ZERO,
            depth: MIN_DEPTH,
            size: 1.0,
            speed: 0.2,
            brightness: 150.0,
            twinkle_speed: 0.0,
            twinkle_amount: 0.0,
            twinkle_offset: 0.0,
            bright: false,
            hue,
        };
        star.respawn(rng, field);
        star
    }

    /// Re-enter at the top with fresh depth
    fn respawn<R: Rng>(&mut self, rng: &mut R, field: &Field) {
        self.pos = Vec2::new(rand_between(rng, 0.0, field.width), -10.0);
        self.prev_pos = self.pos;
        self.depth = rand_between(rng, MIN_DEPTH, MAX_DEPTH);
        self.size = remap(self.depth, MIN_DEPTH, MAX_DEPTH, 1.0, 3.0);
        self.speed = remap(self.depth, MIN_DEPTH, MAX_DEPTH, 0.2, 1.5);
        self.brightness = remap(self.depth, MIN_DEPTH, MAX_DEPTH, 150.0, 255.0);
        self.twinkle_speed = rand_between(rng, 0.01, 0.05);
        self.twinkle_amount = rand_between(rng, 20.0, 50.0);
        self.twinkle_offset = rand_between(rng, 0.0, TAU);
        self.bright = rng.random::<f32>() > 0.97;
        if self.bright {
            self.size *= rand_between(rng, 2.0, 4.0);
        }
    }

    /// Brightness including twinkle at `frame`
    pub fn twinkled_brightness(&self, frame: u64) -> f32 {
        let phase = frame as f32 * self.twinkle_speed + self.twinkle_offset;
        (self.brightness + phase.sin() * self.twinkle_amount).clamp(0.0, 255.0)
    }
}

/// The backdrop has its own RNG so it never perturbs gameplay draws
#[derive(Debug, Clone)]
pub struct Starfield {
    pub stars: Vec<Star>,
    pub frame: u64,
    rng: Pcg32,
}

impl Starfield {
    pub fn new(seed: u64, field: &Field, count: usize) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| {
                let mut star = Star::new(&mut rng, field);
                // Initial stars are scattered over the whole field
                star.pos.y = rand_between(&mut rng, 0.0, field.height);
                star.prev_pos = star.pos;
                star
            })
            .collect();
        Self { stars, frame: 0, rng }
    }

    /// Drift every star one frame, recycling those that leave the field
    pub fn update(&mut self, field: &Field) {
        let rng = &mut self.rng;
        self.frame += 1;
        let sway = (self.frame as f32 * 0.005).sin() * 0.1;
        let sway = if self.frame % 60 < 30 { sway } else { -sway };
        for star in &mut self.stars {
            star.prev_pos = star.pos;
            star.pos.y += star.speed;
            star.pos.x += sway * star.depth;
            if star.pos.y > field.height || star.pos.x < 0.0 || star.pos.x > field.width {
                star.respawn(rng, field);
            }
        }
    }

    /// Add up to `count` new stars at the top
    pub fn replenish(&mut self, field: &Field, count: usize) {
        let count = count.min(MAX_STARS.saturating_sub(self.stars.len()));
        let rng = &mut self.rng;
        self.stars.extend((0..count).map(|_| Star::new(rng, field)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_stay_inside_field() {
        let field = Field::default();
        let mut starfield = Starfield::new(1, &field, 50);
        for _ in 0..2000 {
            starfield.update(&field);
        }
        assert_eq!(starfield.stars.len(), 50);
        for star in &starfield.stars {
            assert!(star.pos.y <= field.height);
            assert!((0.1..3.0).contains(&star.depth));
            assert!((0.2..=1.5).contains(&star.speed));
        }
    }

    #[test]
    fn test_replenish_adds_stars_at_top() {
        let field = Field::default();
        let mut starfield = Starfield::new(1, &field, 0);
        starfield.replenish(&field, 3);
        assert_eq!(starfield.stars.len(), 3);
        assert!(starfield.stars.iter().all(|s| s.pos.y == -10.0));
    }

    #[test]
    fn test_replenish_is_capped() {
        let field = Field::default();
        let mut starfield = Starfield::new(1, &field, MAX_STARS - 1);
        starfield.replenish(&field, 3);
        assert_eq!(starfield.stars.len(), MAX_STARS);
    }
}
