//! Session controller
//!
//! Screen state machine above the simulation. Input events arrive between
//! ticks; the host calls [`SessionController::tick`] once per fixed step with
//! the current real time. Leaderboard calls are never made from here: the
//! controller queues [`ServiceRequest`]s and the host feeds results back
//! through `on_leaderboard_loaded` / `on_submission_finished`.

pub mod layout;
pub mod name_entry;

pub use name_entry::{MAX_NAME_LEN, NameBuffer};

use std::time::Duration;

use glam::Vec2;

use crate::leaderboard::{LeaderboardCache, LeaderboardEntry, ScoreSubmission, ServiceError};
use crate::sim::{self, GameEvent, SimulationState, TickInput};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Play,
    GameOver,
    /// Frozen scene under the name prompt
    NameInput,
    /// Frozen scene under the high-score table
    Leaderboard,
}

impl Screen {
    /// Whether the simulation advances on this screen
    pub fn is_live(self) -> bool {
        self == Screen::Play
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Enter,
    /// Printable character; space is the fire/confirm key
    Char(char),
}

impl Key {
    pub const FIRE: Key = Key::Char(' ');

    fn is_leaderboard_shortcut(self) -> bool {
        matches!(self, Key::Char('l' | 'L'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Primary pointer press at field coordinates
    Click(Vec2),
}

/// Whether an input event did anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Applied,
    Ignored,
}

/// Work for the leaderboard service, queued for the host to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRequest {
    LoadTop { limit: usize },
    Submit(ScoreSubmission),
}

pub struct SessionController {
    screen: Screen,
    sim: SimulationState,
    /// Directions currently held down
    held: TickInput,
    /// Kept across sessions so returning players need not retype it
    name: NameBuffer,
    leaderboard: LeaderboardCache,
    /// Real time at which the name prompt replaces the game-over screen
    pending_prompt: Option<Duration>,
    /// Real time of the latest tick
    now: Duration,
    submitting: bool,
    loading: bool,
    /// A refresh was asked for while a load was in flight
    reload_pending: bool,
    outbox: Vec<ServiceRequest>,
}

impl SessionController {
    /// Controller on the start screen; the first leaderboard load is queued
    pub fn new(sim: SimulationState, leaderboard_limit: usize) -> Self {
        let mut controller = Self {
            screen: Screen::Start,
            sim,
            held: TickInput::default(),
            name: NameBuffer::new(),
            leaderboard: LeaderboardCache::new(leaderboard_limit),
            pending_prompt: None,
            now: Duration::ZERO,
            submitting: false,
            loading: false,
            reload_pending: false,
            outbox: Vec::new(),
        };
        controller.request_refresh();
        controller
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn sim(&self) -> &SimulationState {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut SimulationState {
        &mut self.sim
    }

    pub fn name(&self) -> &NameBuffer {
        &self.name
    }

    pub fn leaderboard(&self) -> &LeaderboardCache {
        &self.leaderboard
    }

    pub fn pending_prompt(&self) -> Option<Duration> {
        self.pending_prompt
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether `entry` was posted under the name currently typed
    pub fn is_own_entry(&self, entry: &LeaderboardEntry) -> bool {
        self.name.is_submittable() && entry.name == self.name.trimmed()
    }

    /// Hand queued service work to the host
    pub fn take_requests(&mut self) -> Vec<ServiceRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Route one input event. Only called between ticks.
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::KeyDown(key) => self.key_down(key),
            InputEvent::KeyUp(key) => self.key_up(key),
            InputEvent::Click(at) => self.click(at),
        }
    }

    /// Advance one fixed step at real time `now`
    pub fn tick(&mut self, now: Duration) {
        self.now = now;

        match self.screen {
            Screen::Play => {
                sim::tick(&mut self.sim, &self.held);
                self.apply_events();
            }
            Screen::GameOver | Screen::NameInput | Screen::Leaderboard => sim::animate_frozen(&mut self.sim),
            Screen::Start => {}
        }
        sim::update_backdrop(&mut self.sim, self.screen.is_live());

        if self.pending_prompt.is_some_and(|at| now >= at) {
            self.pending_prompt = None;
            log::info!("Prompting for a leaderboard name (score {})", self.sim.score);
            self.screen = Screen::NameInput;
        }
    }

    /// Result of a `LoadTop` request
    pub fn on_leaderboard_loaded(&mut self, result: Result<Vec<LeaderboardEntry>, ServiceError>) {
        self.loading = false;
        match result {
            Ok(entries) => {
                log::info!("Leaderboard loaded ({} entries)", entries.len());
                self.leaderboard.replace(entries);
            }
            Err(err) => log::warn!(
                "Leaderboard load failed, keeping {} cached entries: {err}",
                self.leaderboard.entries().len()
            ),
        }
        if std::mem::take(&mut self.reload_pending) {
            self.request_refresh();
        }
    }

    /// Result of a `Submit` request
    pub fn on_submission_finished(&mut self, result: Result<(), ServiceError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                log::info!("Score submitted for {}", self.name.trimmed());
                if self.screen == Screen::NameInput {
                    self.screen = Screen::Leaderboard;
                }
                self.request_refresh();
            }
            // Stay on the prompt; confirming again retries
            Err(err) if err.is_validation() => log::debug!("Score submission rejected: {err}"),
            Err(err) => log::warn!("Score submission failed: {err}"),
        }
    }

    /// Fresh session: reset the simulation and drop any pending prompt
    pub fn start_session(&mut self) {
        if self.pending_prompt.take().is_some() {
            log::debug!("Pending name prompt cancelled by a new session");
        }
        self.sim.reset();
        self.screen = Screen::Play;
        log::info!("Session started (seed {})", self.sim.seed);
    }

    fn key_down(&mut self, key: Key) -> InputOutcome {
        if self.set_held(key, true) {
            return InputOutcome::Applied;
        }

        match self.screen {
            Screen::Start | Screen::GameOver if key == Key::FIRE => {
                self.start_session();
                InputOutcome::Applied
            }
            Screen::Start | Screen::GameOver if key.is_leaderboard_shortcut() => {
                self.open_leaderboard();
                InputOutcome::Applied
            }
            Screen::Play if key == Key::FIRE => {
                sim::fire(&mut self.sim);
                InputOutcome::Applied
            }
            Screen::NameInput => self.edit_name(key),
            _ => InputOutcome::Ignored,
        }
    }

    fn key_up(&mut self, key: Key) -> InputOutcome {
        if self.set_held(key, false) {
            InputOutcome::Applied
        } else {
            InputOutcome::Ignored
        }
    }

    /// Track movement keys on every screen so a key held through a
    /// transition behaves. Returns false for non-movement keys.
    fn set_held(&mut self, key: Key, down: bool) -> bool {
        let slot = match key {
            Key::Left => &mut self.held.left,
            Key::Right => &mut self.held.right,
            Key::Up => &mut self.held.up,
            Key::Down => &mut self.held.down,
            _ => return false,
        };
        *slot = down;
        true
    }

    fn click(&mut self, at: Vec2) -> InputOutcome {
        let field = self.sim.field;
        match self.screen {
            Screen::Start if layout::start_scores_button(&field).contains(at) => self.open_leaderboard(),
            Screen::GameOver if layout::game_over_scores_button(&field).contains(at) => self.open_leaderboard(),
            Screen::Start | Screen::GameOver => self.start_session(),
            Screen::Play => sim::fire(&mut self.sim),
            Screen::NameInput if layout::submit_button(&field).contains(at) => return self.submit_name(),
            Screen::Leaderboard if layout::back_button(&field).contains(at) => self.screen = Screen::Start,
            Screen::NameInput | Screen::Leaderboard => return InputOutcome::Ignored,
        }
        InputOutcome::Applied
    }

    fn edit_name(&mut self, key: Key) -> InputOutcome {
        match key {
            Key::Enter => self.submit_name(),
            Key::Backspace => {
                self.name.backspace();
                InputOutcome::Applied
            }
            Key::Char(c) if self.name.push(c) => InputOutcome::Applied,
            _ => InputOutcome::Ignored,
        }
    }

    fn submit_name(&mut self) -> InputOutcome {
        if self.submitting {
            log::debug!("Submission already in flight");
            return InputOutcome::Ignored;
        }
        match ScoreSubmission::new(self.name.as_str(), self.sim.score, self.sim.level) {
            Ok(submission) => {
                log::info!(
                    "Submitting {} with score {} at level {}",
                    submission.name,
                    submission.score,
                    submission.level
                );
                self.submitting = true;
                self.outbox.push(ServiceRequest::Submit(submission));
                InputOutcome::Applied
            }
            Err(err) => {
                log::debug!("Submission rejected: {err}");
                InputOutcome::Ignored
            }
        }
    }

    fn open_leaderboard(&mut self) {
        self.screen = Screen::Leaderboard;
        self.request_refresh();
    }

    fn request_refresh(&mut self) {
        if self.loading {
            self.reload_pending = true;
            return;
        }
        self.loading = true;
        self.outbox.push(ServiceRequest::LoadTop {
            limit: self.leaderboard.capacity(),
        });
    }

    fn apply_events(&mut self) {
        for event in self.sim.drain_events() {
            if let GameEvent::AvatarDestroyed { score, level } = event {
                self.enter_game_over(score, level);
            }
        }
    }

    fn enter_game_over(&mut self, score: u64, level: u32) {
        log::info!("Game over: score {score}, level {level}");
        self.screen = Screen::GameOver;
        let progression = self.sim.tuning.progression;
        if score > progression.name_prompt_min_score {
            self.pending_prompt = Some(self.now + Duration::from_millis(progression.name_prompt_delay_ms));
        }
    }
}
