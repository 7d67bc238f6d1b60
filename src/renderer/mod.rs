//! Drawing boundary
//!
//! The host supplies a [`Canvas`] (window, terminal, test recorder); this
//! module turns session and simulation state into calls on it. Colors are
//! RGBA with every channel in 0-1.

pub mod overlay;
pub mod shapes;

use glam::Vec2;

use crate::session::{Screen, SessionController};
use crate::sim::SimulationState;

pub type Color = [f32; 4];

pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Primitive drawing operations provided by the host
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
    fn text(&mut self, text: &str, at: Vec2, size: f32, align: TextAlign, color: Color);
}

/// Something that can put itself on a canvas
pub trait Draw {
    fn draw(&self, canvas: &mut dyn Canvas);
}

/// Same color at a different opacity
#[inline]
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    [color[0], color[1], color[2], alpha.clamp(0.0, 1.0)]
}

/// Full frame for the current screen
pub fn draw_frame(canvas: &mut dyn Canvas, session: &SessionController) {
    let sim = session.sim();
    canvas.fill_rect(0.0, 0.0, sim.field.width, sim.field.height, BLACK);
    sim.starfield.draw(canvas);

    match session.screen() {
        Screen::Start => overlay::draw_start(canvas, session),
        Screen::Play => {
            draw_scene(canvas, sim);
            overlay::draw_hud(canvas, sim);
        }
        Screen::GameOver => {
            draw_scene(canvas, sim);
            overlay::draw_game_over(canvas, session);
        }
        Screen::NameInput => {
            draw_scene(canvas, sim);
            overlay::draw_name_prompt(canvas, session);
        }
        Screen::Leaderboard => {
            draw_scene(canvas, sim);
            overlay::draw_leaderboard(canvas, session);
        }
    }
}

/// Every entity, back to front
pub fn draw_scene(canvas: &mut dyn Canvas, sim: &SimulationState) {
    let drawables = sim
        .collectibles
        .iter()
        .map(|c| c as &dyn Draw)
        .chain(sim.hostiles.iter().map(|h| h as &dyn Draw))
        .chain(sim.projectiles.iter().map(|p| p as &dyn Draw));
    for item in drawables {
        item.draw(canvas);
    }
    if !sim.avatar_destroyed() {
        sim.avatar.draw(canvas);
    }
    for effect in &sim.effects {
        effect.draw(canvas);
    }
}
