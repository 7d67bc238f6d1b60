//! Entity shapes
//!
//! Each entity draws itself from its own state only; nothing here mutates.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

use super::{Canvas, Color, Draw, WHITE, with_alpha};
use crate::sim::{
    Avatar, Collectible, CollectibleKind, Effect, EffectShape, EffectTint, Hostile, HostileKind, Owner, Projectile,
    StarHue, Starfield,
};

const AVATAR_BODY: Color = [0.0, 0.78, 1.0, 1.0];
const AVATAR_COCKPIT: Color = [0.6, 0.95, 1.0, 1.0];
const DAMAGE_RED: Color = [1.0, 0.2, 0.2, 1.0];
const SHIELD_BLUE: Color = [0.3, 0.6, 1.0, 1.0];
const THRUSTER: Color = [1.0, 0.55, 0.1, 1.0];
const PLAYER_SHOT: Color = [0.4, 1.0, 0.4, 1.0];
const HOSTILE_SHOT: Color = [1.0, 0.3, 0.3, 1.0];

/// Body color per hostile class
pub fn hostile_color(kind: HostileKind) -> Color {
    match kind {
        HostileKind::Scout => [1.0, 0.4, 0.4, 1.0],
        HostileKind::Destroyer => [1.0, 0.65, 0.2, 1.0],
        HostileKind::Battleship => [0.75, 0.35, 1.0, 1.0],
    }
}

pub fn collectible_color(kind: CollectibleKind) -> Color {
    match kind {
        CollectibleKind::Shield => SHIELD_BLUE,
        CollectibleKind::WeaponUpgrade => [1.0, 0.85, 0.1, 1.0],
        CollectibleKind::ExtraLife => [0.3, 1.0, 0.4, 1.0],
    }
}

/// Letter stamped on a collectible
pub fn collectible_glyph(kind: CollectibleKind) -> &'static str {
    match kind {
        CollectibleKind::Shield => "S",
        CollectibleKind::WeaponUpgrade => "W",
        CollectibleKind::ExtraLife => "+",
    }
}

/// Effect palette. Fire debris blends red to yellow by its heat.
pub fn effect_color(tint: EffectTint, heat: f32) -> Color {
    match tint {
        EffectTint::Fire => [1.0, 0.3 + 0.6 * heat, 0.1, 1.0],
        EffectTint::Spark => [1.0, 1.0, 0.5, 1.0],
        EffectTint::Damage => DAMAGE_RED,
        EffectTint::Shield => SHIELD_BLUE,
        EffectTint::Muzzle => [1.0, 0.6, 0.3, 1.0],
        EffectTint::Pickup(kind) => collectible_color(kind),
    }
}

fn star_color(hue: StarHue) -> Color {
    match hue {
        StarHue::BlueWhite => [0.85, 0.9, 1.0, 1.0],
        StarHue::Yellow => [1.0, 0.95, 0.7, 1.0],
        StarHue::Orange => [1.0, 0.8, 0.6, 1.0],
        StarHue::RedDwarf => [1.0, 0.6, 0.55, 1.0],
        StarHue::Bluish => [0.7, 0.8, 1.0, 1.0],
    }
}

/// Regular polygon around `center`, first vertex at `rotation`
fn regular_polygon(center: Vec2, radius: f32, sides: usize, rotation: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| center + Vec2::from_angle(rotation + TAU * i as f32 / sides as f32) * radius)
        .collect()
}

fn offset_all(center: Vec2, offsets: &[Vec2]) -> Vec<Vec2> {
    offsets.iter().map(|o| center + *o).collect()
}

impl Draw for Avatar {
    fn draw(&self, canvas: &mut dyn Canvas) {
        let s = self.size;
        let p = self.pos;

        // Flickering exhaust under the hull
        let flame = s * (0.35 + 0.1 * (self.thruster_phase * 10.0).sin());
        canvas.fill_polygon(
            &[
                p + Vec2::new(-s / 6.0, s / 2.0),
                p + Vec2::new(s / 6.0, s / 2.0),
                p + Vec2::new(0.0, s / 2.0 + flame),
            ],
            THRUSTER,
        );

        let body = if self.damage_flash > 0 { DAMAGE_RED } else { AVATAR_BODY };
        canvas.fill_polygon(
            &[
                p + Vec2::new(0.0, -s / 2.0),
                p + Vec2::new(s / 2.0, s / 2.0),
                p + Vec2::new(0.0, s / 4.0),
                p + Vec2::new(-s / 2.0, s / 2.0),
            ],
            body,
        );
        canvas.fill_circle(p + Vec2::new(0.0, -s / 10.0), s / 8.0, AVATAR_COCKPIT);

        if self.shield_active() {
            // Fades during the last second
            let alpha = 0.15 + 0.25 * (self.shield_ticks() as f32 / 60.0).min(1.0);
            canvas.fill_circle(p, s * 0.75, with_alpha(SHIELD_BLUE, alpha));
        }
    }
}

impl Draw for Projectile {
    fn draw(&self, canvas: &mut dyn Canvas) {
        let color = match self.owner() {
            Owner::Player => PLAYER_SHOT,
            Owner::Hostile => HOSTILE_SHOT,
        };

        // Oldest trail point is faintest and smallest
        let n = self.trail.len() as f32;
        for (i, point) in self.trail.iter().enumerate() {
            let t = (i + 1) as f32 / (n + 1.0);
            canvas.fill_circle(*point, self.size / 2.0 * t, with_alpha(color, 0.6 * t));
        }
        canvas.fill_circle(self.pos, self.size / 2.0, color);
        canvas.fill_circle(self.pos, self.size / 5.0, WHITE);
    }
}

impl Draw for Hostile {
    fn draw(&self, canvas: &mut dyn Canvas) {
        let s = self.size;
        let color = hostile_color(self.kind);

        // Nose points down, toward the player
        let hull = match self.kind {
            HostileKind::Scout => offset_all(
                self.pos,
                &[
                    Vec2::new(0.0, s / 2.0),
                    Vec2::new(s / 2.0, -s / 2.0),
                    Vec2::new(-s / 2.0, -s / 2.0),
                ],
            ),
            HostileKind::Destroyer => offset_all(
                self.pos,
                &[
                    Vec2::new(0.0, s / 2.0),
                    Vec2::new(s / 2.0, 0.0),
                    Vec2::new(s / 3.0, -s / 2.0),
                    Vec2::new(-s / 3.0, -s / 2.0),
                    Vec2::new(-s / 2.0, 0.0),
                ],
            ),
            HostileKind::Battleship => regular_polygon(self.pos, s / 2.0, 6, PI / 6.0),
        };
        canvas.fill_polygon(&hull, color);

        let glow = 0.5 + 0.5 * (self.thruster_phase * 8.0).sin();
        canvas.fill_circle(
            self.pos + Vec2::new(0.0, -s / 2.0),
            s / 10.0,
            with_alpha(THRUSTER, 0.4 + 0.4 * glow),
        );

        // Remaining health as pips above the hull
        let health = self.health();
        if self.kind.max_health() > 1 {
            for i in 0..health {
                let x = self.pos.x + (i as f32 - (health as f32 - 1.0) / 2.0) * 6.0;
                canvas.fill_circle(Vec2::new(x, self.pos.y - s / 2.0 - 6.0), 2.0, WHITE);
            }
        }
    }
}

impl Draw for Collectible {
    fn draw(&self, canvas: &mut dyn Canvas) {
        let color = collectible_color(self.kind);
        let s = self.size;
        canvas.fill_circle(self.pos, s * 0.8, with_alpha(color, 0.25));
        canvas.fill_polygon(&regular_polygon(self.pos, s / 2.0, 4, self.rotation), color);
        canvas.text(
            collectible_glyph(self.kind),
            self.pos,
            s * 0.6,
            super::TextAlign::Center,
            super::BLACK,
        );
    }
}

impl Draw for Effect {
    fn draw(&self, canvas: &mut dyn Canvas) {
        if self.size <= 0.0 {
            return;
        }
        let mut color = with_alpha(effect_color(self.tint, self.heat), self.alpha());
        if self.sparkle && (self.lifespan as u32 / 20) % 2 == 0 {
            color = with_alpha(WHITE, self.alpha());
        }
        match self.shape {
            EffectShape::Circle => canvas.fill_circle(self.pos, self.size / 2.0, color),
            EffectShape::Square => {
                canvas.fill_polygon(&regular_polygon(self.pos, self.size / 2.0, 4, self.rotation), color)
            }
            EffectShape::Triangle => {
                canvas.fill_polygon(&regular_polygon(self.pos, self.size / 2.0, 3, self.rotation), color)
            }
        }
    }
}

impl Draw for Starfield {
    fn draw(&self, canvas: &mut dyn Canvas) {
        for star in &self.stars {
            let alpha = star.twinkled_brightness(self.frame) / 255.0;
            let color = with_alpha(star_color(star.hue), alpha);
            // Near stars streak
            if star.depth > 2.0 {
                canvas.line(star.prev_pos, star.pos, star.size / 2.0, with_alpha(color, alpha * 0.5));
            }
            canvas.fill_circle(star.pos, star.size / 2.0, color);
            if star.bright {
                canvas.fill_circle(star.pos, star.size * 1.5, with_alpha(color, alpha * 0.2));
            }
        }
    }
}
