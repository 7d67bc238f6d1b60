//! HUD and screen overlays

use glam::Vec2;

use super::shapes::collectible_color;
use super::{BLACK, Canvas, Color, TextAlign, WHITE, with_alpha};
use crate::session::layout::{self, Rect};
use crate::session::SessionController;
use crate::sim::{CollectibleKind, SimulationState};

const ACCENT: Color = [0.0, 0.78, 1.0, 1.0];
const DIM: Color = [0.6, 0.6, 0.7, 1.0];
const HIGHLIGHT: Color = [1.0, 0.85, 0.1, 1.0];
const PANEL: Color = [0.0, 0.0, 0.0, 0.7];
const BUTTON: Color = [0.1, 0.3, 0.5, 1.0];
const BUTTON_DISABLED: Color = [0.25, 0.25, 0.3, 1.0];

const BAR_WIDTH: f32 = 100.0;
const BAR_HEIGHT: f32 = 8.0;

fn button(canvas: &mut dyn Canvas, rect: Rect, label: &str, enabled: bool) {
    let fill = if enabled { BUTTON } else { BUTTON_DISABLED };
    canvas.fill_rect(rect.x, rect.y, rect.w, rect.h, fill);
    let text = if enabled { WHITE } else { DIM };
    canvas.text(label, rect.center(), 18.0, TextAlign::Center, text);
}

fn dim_field(canvas: &mut dyn Canvas, sim: &SimulationState) {
    canvas.fill_rect(0.0, 0.0, sim.field.width, sim.field.height, PANEL);
}

/// Labelled countdown bar; `fraction` of it is filled
fn timer_bar(canvas: &mut dyn Canvas, at: Vec2, label: &str, fraction: f32, color: Color) {
    canvas.text(label, at, 14.0, TextAlign::Left, color);
    let x = at.x + 60.0;
    canvas.fill_rect(x, at.y - BAR_HEIGHT, BAR_WIDTH, BAR_HEIGHT, with_alpha(color, 0.25));
    canvas.fill_rect(x, at.y - BAR_HEIGHT, BAR_WIDTH * fraction.clamp(0.0, 1.0), BAR_HEIGHT, color);
}

/// Score, level, lives and buff timers
pub fn draw_hud(canvas: &mut dyn Canvas, sim: &SimulationState) {
    canvas.text(&format!("Score: {}", sim.score), Vec2::new(20.0, 30.0), 20.0, TextAlign::Left, WHITE);
    canvas.text(&format!("Level: {}", sim.level), Vec2::new(20.0, 55.0), 20.0, TextAlign::Left, WHITE);

    // One small ship per life, right-aligned
    for i in 0..sim.lives {
        let x = sim.field.width - 25.0 - i as f32 * 25.0;
        canvas.fill_polygon(
            &[
                Vec2::new(x, 15.0),
                Vec2::new(x + 8.0, 31.0),
                Vec2::new(x - 8.0, 31.0),
            ],
            ACCENT,
        );
    }

    let tuning = &sim.tuning.avatar;
    let mut y = 80.0;
    if sim.avatar.shield_active() {
        let fraction = sim.avatar.shield_ticks() as f32 / tuning.shield_ticks.max(1) as f32;
        timer_bar(canvas, Vec2::new(20.0, y), "Shield", fraction, collectible_color(CollectibleKind::Shield));
        y += 20.0;
    }
    if sim.avatar.weapon_tier() > 1 {
        let fraction = sim.avatar.weapon_ticks() as f32 / tuning.weapon_ticks.max(1) as f32;
        let label = format!("Gun x{}", sim.avatar.weapon_tier());
        timer_bar(
            canvas,
            Vec2::new(20.0, y),
            &label,
            fraction,
            collectible_color(CollectibleKind::WeaponUpgrade),
        );
    }
}

pub fn draw_start(canvas: &mut dyn Canvas, session: &SessionController) {
    let sim = session.sim();
    let c = sim.field.center();
    canvas.text("VOID PATROL", c - Vec2::new(0.0, 80.0), 48.0, TextAlign::Center, ACCENT);
    canvas.text(
        "Arrow keys to move, SPACE to fire",
        c,
        18.0,
        TextAlign::Center,
        WHITE,
    );
    canvas.text(
        "Press SPACE or click to start",
        c + Vec2::new(0.0, 40.0),
        18.0,
        TextAlign::Center,
        DIM,
    );
    canvas.text("L for high scores", c + Vec2::new(0.0, 70.0), 14.0, TextAlign::Center, DIM);
    if let Some(best) = session.leaderboard().top_score() {
        canvas.text(&format!("Best: {best}"), c + Vec2::new(0.0, 110.0), 16.0, TextAlign::Center, HIGHLIGHT);
    }
    button(canvas, layout::start_scores_button(&sim.field), "High Scores", true);
}

pub fn draw_game_over(canvas: &mut dyn Canvas, session: &SessionController) {
    let sim = session.sim();
    dim_field(canvas, sim);
    let c = sim.field.center();
    canvas.text("GAME OVER", c - Vec2::new(0.0, 60.0), 48.0, TextAlign::Center, [1.0, 0.3, 0.3, 1.0]);
    canvas.text(
        &format!("Final score: {}  Level: {}", sim.score, sim.level),
        c,
        22.0,
        TextAlign::Center,
        WHITE,
    );
    // Only meaningful once the board has loaded
    let board = session.leaderboard();
    if let Some(rank) = board.potential_rank(sim.score).filter(|_| board.is_loaded()) {
        canvas.text(
            &format!("Would rank #{rank}"),
            c + Vec2::new(0.0, 25.0),
            16.0,
            TextAlign::Center,
            HIGHLIGHT,
        );
    }
    canvas.text(
        "Press SPACE or click to play again",
        c + Vec2::new(0.0, 40.0),
        18.0,
        TextAlign::Center,
        DIM,
    );
    button(canvas, layout::game_over_scores_button(&sim.field), "High Scores", true);
}

pub fn draw_name_prompt(canvas: &mut dyn Canvas, session: &SessionController) {
    let sim = session.sim();
    dim_field(canvas, sim);
    let c = sim.field.center();
    canvas.text("NEW HIGH SCORE?", c - Vec2::new(0.0, 90.0), 32.0, TextAlign::Center, HIGHLIGHT);
    canvas.text(
        &format!("Score {} at level {}. Enter your name:", sim.score, sim.level),
        c - Vec2::new(0.0, 50.0),
        18.0,
        TextAlign::Center,
        WHITE,
    );

    canvas.fill_rect(c.x - 150.0, c.y - 30.0, 300.0, 40.0, BLACK);
    let name = session.name();
    // Blinking caret, half a second on and off
    let caret = if (sim.starfield.frame / 30) % 2 == 0 { "_" } else { "" };
    canvas.text(
        &format!("{}{caret}", name.as_str()),
        Vec2::new(c.x, c.y - 10.0),
        22.0,
        TextAlign::Center,
        WHITE,
    );

    let label = if session.is_submitting() { "Submitting..." } else { "Submit" };
    let enabled = name.is_submittable() && !session.is_submitting();
    button(canvas, layout::submit_button(&sim.field), label, enabled);
}

pub fn draw_leaderboard(canvas: &mut dyn Canvas, session: &SessionController) {
    let sim = session.sim();
    dim_field(canvas, sim);
    let c = sim.field.center();
    canvas.text("HIGH SCORES", Vec2::new(c.x, 80.0), 36.0, TextAlign::Center, ACCENT);

    let board = session.leaderboard();
    if !board.is_loaded() {
        canvas.text("Loading leaderboard...", c, 20.0, TextAlign::Center, DIM);
    } else if board.is_empty() {
        canvas.text("No scores yet", c, 20.0, TextAlign::Center, DIM);
    } else {
        let (rank_x, name_x, score_x, level_x) = (c.x - 220.0, c.x - 170.0, c.x + 120.0, c.x + 220.0);
        let header_y = 130.0;
        canvas.text("#", Vec2::new(rank_x, header_y), 16.0, TextAlign::Left, DIM);
        canvas.text("Name", Vec2::new(name_x, header_y), 16.0, TextAlign::Left, DIM);
        canvas.text("Score", Vec2::new(score_x, header_y), 16.0, TextAlign::Right, DIM);
        canvas.text("Level", Vec2::new(level_x, header_y), 16.0, TextAlign::Right, DIM);

        for (i, entry) in board.entries().iter().enumerate() {
            let y = header_y + 30.0 + i as f32 * 30.0;
            let color = if session.is_own_entry(entry) { HIGHLIGHT } else { WHITE };
            canvas.text(&format!("{}", i + 1), Vec2::new(rank_x, y), 18.0, TextAlign::Left, color);
            canvas.text(&entry.display_name(), Vec2::new(name_x, y), 18.0, TextAlign::Left, color);
            canvas.text(&entry.score.to_string(), Vec2::new(score_x, y), 18.0, TextAlign::Right, color);
            canvas.text(&entry.level.to_string(), Vec2::new(level_x, y), 18.0, TextAlign::Right, color);
        }
    }

    button(canvas, layout::back_button(&sim.field), "Back", true);
}

#[cfg(test)]
mod tests {
    use super::super::recording::{Op, RecordingCanvas};
    use super::*;
    use crate::leaderboard::LeaderboardEntry;
    use crate::session::{InputEvent, Key};
    use crate::sim::SimulationState;
    use crate::tuning::Tuning;

    fn session() -> SessionController {
        SessionController::new(SimulationState::new(4, Tuning::default()), 10)
    }

    fn entry(name: &str, score: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            level: 2,
            created_at: None,
        }
    }

    #[test]
    fn test_leaderboard_shows_loading_until_first_load() {
        let mut s = session();
        s.handle_input(InputEvent::KeyDown(Key::Char('l')));
        let mut canvas = RecordingCanvas::default();
        draw_leaderboard(&mut canvas, &s);
        assert!(canvas.has_text("Loading leaderboard..."));

        s.on_leaderboard_loaded(Ok(vec![entry("Ace", 500)]));
        let mut canvas = RecordingCanvas::default();
        draw_leaderboard(&mut canvas, &s);
        assert!(!canvas.has_text("Loading"));
        assert!(canvas.has_text("Ace"));
        assert!(canvas.has_text("500"));
        assert!(canvas.has_text("Back"));
    }

    #[test]
    fn test_long_names_are_shortened() {
        let mut s = session();
        s.on_leaderboard_loaded(Ok(vec![entry("a_very_long_player_name", 10)]));
        let mut canvas = RecordingCanvas::default();
        draw_leaderboard(&mut canvas, &s);
        assert!(canvas.has_text("a_very_long_..."));
        assert!(!canvas.has_text("a_very_long_player_name"));
    }

    #[test]
    fn test_hud_shows_buff_bars() {
        let mut sim = SimulationState::new(4, Tuning::default());
        let mut canvas = RecordingCanvas::default();
        draw_hud(&mut canvas, &sim);
        assert!(!canvas.has_text("Shield"));
        let lives = canvas.ops.iter().filter(|op| matches!(op, Op::Polygon { .. })).count();
        assert_eq!(lives, 3);

        sim.avatar.activate_shield(150);
        sim.avatar.upgrade_weapon(600);
        let mut canvas = RecordingCanvas::default();
        draw_hud(&mut canvas, &sim);
        assert!(canvas.has_text("Shield"));
        assert!(canvas.has_text("Gun x2"));
        let half = canvas
            .ops
            .iter()
            .any(|op| matches!(op, Op::Rect { w, .. } if (*w - BAR_WIDTH / 2.0).abs() < 1e-3));
        assert!(half);
    }

    #[test]
    fn test_start_shows_best_score_once_loaded() {
        let mut s = session();
        let mut canvas = RecordingCanvas::default();
        draw_start(&mut canvas, &s);
        assert!(!canvas.has_text("Best:"));

        s.on_leaderboard_loaded(Ok(vec![entry("Ace", 500), entry("Bo", 700)]));
        let mut canvas = RecordingCanvas::default();
        draw_start(&mut canvas, &s);
        assert!(canvas.has_text("Best: 700"));
    }

    #[test]
    fn test_game_over_shows_potential_rank() {
        let mut s = session();
        s.sim_mut().score = 600;
        let mut canvas = RecordingCanvas::default();
        draw_game_over(&mut canvas, &s);
        assert!(!canvas.has_text("Would rank"));

        s.on_leaderboard_loaded(Ok(vec![entry("Ace", 500), entry("Bo", 700)]));
        let mut canvas = RecordingCanvas::default();
        draw_game_over(&mut canvas, &s);
        assert!(canvas.has_text("Would rank #2"));

        s.sim_mut().score = 0;
        let mut canvas = RecordingCanvas::default();
        draw_game_over(&mut canvas, &s);
        assert!(!canvas.has_text("Would rank"));
    }

    #[test]
    fn test_submit_button_disabled_for_blank_name() {
        let s = session();
        let mut canvas = RecordingCanvas::default();
        draw_name_prompt(&mut canvas, &s);
        let rect = layout::submit_button(&s.sim().field);
        assert!(canvas.ops.iter().any(
            |op| matches!(op, Op::Rect { x, y, color, .. } if *x == rect.x && *y == rect.y && *color == BUTTON_DISABLED)
        ));
    }
}
