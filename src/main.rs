//! Void Patrol entry point
//!
//! Headless driver: plays one session with a simple autopilot at the fixed
//! tick rate and logs what happens. A windowed host swaps the autopilot for
//! real input and draws each frame through `void_patrol::renderer`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use void_patrol::consts::{TICK_DURATION, TICK_RATE};
use void_patrol::leaderboard::{InMemoryLeaderboard, SupabaseLeaderboard};
use void_patrol::runtime::GameRuntime;
use void_patrol::session::{InputEvent, Key, Screen, SessionController};
use void_patrol::sim::SimulationState;
use void_patrol::{LeaderboardService, Settings};

#[derive(Parser)]
#[command(name = "void-patrol")]
#[command(about = "Arcade space shooter, played by a headless autopilot")]
struct Cli {
    /// Longest run to simulate, in seconds of game time
    #[arg(long, default_value_t = 120)]
    seconds: u64,
    /// Run seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Settings file (defaults to $VOID_PATROL_SETTINGS or void-patrol.json)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Name entered at the leaderboard prompt
    #[arg(long, default_value = "PILOT")]
    name: String,
    /// Pace ticks in real time instead of running flat out
    #[arg(long)]
    realtime: bool,
}

/// Drives the session the way a (not very good) player would
struct Autopilot {
    name: String,
    typed: bool,
}

impl Autopilot {
    fn new(name: String) -> Self {
        Self { name, typed: false }
    }

    fn inputs(&mut self, session: &SessionController) -> Vec<InputEvent> {
        match session.screen() {
            Screen::Start => vec![InputEvent::KeyDown(Key::FIRE)],
            Screen::Play => Self::fly(session),
            Screen::NameInput if !self.typed => {
                self.typed = true;
                self.name
                    .chars()
                    .map(|c| InputEvent::KeyDown(Key::Char(c)))
                    .chain(std::iter::once(InputEvent::KeyDown(Key::Enter)))
                    .collect()
            }
            // Retry a failed submission every couple of seconds
            Screen::NameInput if !session.is_submitting() && session.sim().starfield.frame % 120 == 0 => {
                vec![InputEvent::KeyDown(Key::Enter)]
            }
            _ => Vec::new(),
        }
    }

    /// Chase the lowest hostile on screen and fire on a fixed cadence
    fn fly(session: &SessionController) -> Vec<InputEvent> {
        let sim = session.sim();
        let mut events = Vec::new();
        if sim.time_ticks % 8 == 0 {
            events.push(InputEvent::KeyDown(Key::FIRE));
        }

        let target = sim
            .hostiles
            .iter()
            .filter(|h| h.pos.y > 0.0)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
        let dx = target.map_or(0.0, |h| h.pos.x - sim.avatar.pos.x);
        let held = |down: bool, key: Key| {
            if down {
                InputEvent::KeyDown(key)
            } else {
                InputEvent::KeyUp(key)
            }
        };
        events.push(held(dx < -sim.avatar.speed, Key::Left));
        events.push(held(dx > sim.avatar.speed, Key::Right));
        events
    }

    /// Nothing left to do once the board is showing, or the run ended
    /// without earning a prompt
    fn finished(&self, session: &SessionController) -> bool {
        match session.screen() {
            Screen::Leaderboard => self.typed,
            Screen::GameOver => session.pending_prompt().is_none(),
            _ => false,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();
    let cli = Cli::parse();

    let path = cli.settings.clone().unwrap_or_else(Settings::default_path);
    let settings = Settings::load(&path);
    let seed = cli.seed.or(settings.seed).unwrap_or_else(time_seed);
    log::info!("Void Patrol starting (seed {seed})");

    let service: Arc<dyn LeaderboardService> = match settings.leaderboard.remote() {
        Some((url, key)) => {
            log::info!("Using hosted leaderboard at {url}");
            Arc::new(SupabaseLeaderboard::new(url, key, settings.leaderboard.table.clone()))
        }
        None => {
            log::info!("No leaderboard configured, scores stay in memory");
            Arc::new(InMemoryLeaderboard::new())
        }
    };

    let sim = SimulationState::new(seed, settings.tuning.clone());
    let session = SessionController::new(sim, settings.leaderboard.max_entries);
    let mut runtime = GameRuntime::new(session, service, settings.leaderboard.request_timeout());
    let mut pilot = Autopilot::new(cli.name);

    let mut pacing = tokio::time::interval(TICK_DURATION);
    let total_ticks = cli.seconds.saturating_mul(u64::from(TICK_RATE));
    let mut now = Duration::ZERO;
    for _ in 0..total_ticks {
        if cli.realtime {
            pacing.tick().await;
        } else {
            // Let service tasks make progress
            tokio::task::yield_now().await;
        }

        let events = pilot.inputs(runtime.session());
        runtime.frame(events, now);
        now += TICK_DURATION;

        if pilot.finished(runtime.session()) {
            break;
        }
    }
    runtime.settle().await;

    let session = runtime.session();
    let sim = session.sim();
    log::info!(
        "Run over after {:.1}s: score {}, level {}, lives {}",
        now.as_secs_f32(),
        sim.score,
        sim.level,
        sim.lives
    );
    for (rank, entry) in session.leaderboard().entries().iter().enumerate() {
        log::info!("{:>2}. {:<15} {:>7}  level {}", rank + 1, entry.display_name(), entry.score, entry.level);
    }
}
