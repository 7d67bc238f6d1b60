//! Clickable regions on the overlay screens
//!
//! Shared by hit-testing in the session and by the renderer, so a button is
//! always clickable exactly where it is drawn.

use glam::Vec2;

use crate::Field;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Edges count as inside
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// "High scores" button on the start screen
pub fn start_scores_button(field: &Field) -> Rect {
    Rect::new(field.width / 2.0 - 100.0, field.height / 2.0 + 150.0, 200.0, 40.0)
}

/// "High scores" button on the game-over screen
pub fn game_over_scores_button(field: &Field) -> Rect {
    Rect::new(field.width / 2.0 - 100.0, field.height / 2.0 + 100.0, 200.0, 40.0)
}

/// "Back" button on the leaderboard
pub fn back_button(field: &Field) -> Rect {
    Rect::new(field.width / 2.0 - 80.0, field.height / 2.0 + 200.0, 160.0, 40.0)
}

/// "Submit" button on the name prompt
pub fn submit_button(field: &Field) -> Rect {
    Rect::new(field.width / 2.0 - 80.0, field.height / 2.0 + 30.0, 160.0, 40.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_regions() {
        let field = Field::default();
        assert_eq!(start_scores_button(&field), Rect::new(300.0, 450.0, 200.0, 40.0));
        assert_eq!(game_over_scores_button(&field), Rect::new(300.0, 400.0, 200.0, 40.0));
        assert_eq!(back_button(&field), Rect::new(320.0, 500.0, 160.0, 40.0));
        assert_eq!(submit_button(&field), Rect::new(320.0, 330.0, 160.0, 40.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::new(10.0, 10.0, 20.0, 10.0);
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(30.0, 20.0)));
        assert!(r.contains(r.center()));
        assert!(!r.contains(Vec2::new(30.1, 15.0)));
        assert!(!r.contains(Vec2::new(9.9, 15.0)));
    }
}
