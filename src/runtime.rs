//! Async glue between the session and the leaderboard service
//!
//! The session stays single-threaded: service calls run as tokio tasks and
//! their results come back over a channel, applied only between ticks.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::leaderboard::{LeaderboardEntry, LeaderboardService, ServiceError};
use crate::session::{InputEvent, ServiceRequest, SessionController};

/// Finished service call, ready to apply to the session
#[derive(Debug)]
pub enum Completion {
    Loaded(Result<Vec<LeaderboardEntry>, ServiceError>),
    Submitted(Result<(), ServiceError>),
}

pub struct GameRuntime {
    session: SessionController,
    service: Arc<dyn LeaderboardService>,
    /// Upper bound for each service call; expiry counts as failure
    request_timeout: Duration,
    completion_tx: mpsc::Sender<Completion>,
    completion_rx: mpsc::Receiver<Completion>,
    in_flight: usize,
}

impl GameRuntime {
    pub fn new(session: SessionController, service: Arc<dyn LeaderboardService>, request_timeout: Duration) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<Completion>(64);
        Self {
            session,
            service,
            request_timeout,
            completion_tx,
            completion_rx,
            in_flight: 0,
        }
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionController {
        &mut self.session
    }

    /// Service calls started but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Spawn a task for every request the session has queued.
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self) {
        for request in self.session.take_requests() {
            log::debug!("Dispatching {request:?}");
            let service = Arc::clone(&self.service);
            let tx = self.completion_tx.clone();
            let limit = self.request_timeout;
            self.in_flight += 1;
            tokio::spawn(async move {
                let completion = run_request(service.as_ref(), request, limit).await;
                if tx.send(completion).await.is_err() {
                    log::warn!("Runtime dropped before a leaderboard call finished");
                }
            });
        }
    }

    /// Apply every completion that has already arrived. Returns how many.
    pub fn poll_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// One host frame: results, then input, then the fixed step
    pub fn frame(&mut self, events: impl IntoIterator<Item = InputEvent>, now: Duration) {
        self.poll_completions();
        for event in events {
            self.session.handle_input(event);
        }
        self.session.tick(now);
        self.dispatch();
    }

    /// Wait until no service call is outstanding, including follow-ups the
    /// completions themselves queue
    pub async fn settle(&mut self) {
        loop {
            self.dispatch();
            if self.in_flight == 0 {
                break;
            }
            match self.completion_rx.recv().await {
                Some(completion) => self.apply(completion),
                None => break,
            }
        }
    }

    fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match completion {
            Completion::Loaded(result) => self.session.on_leaderboard_loaded(result),
            Completion::Submitted(result) => self.session.on_submission_finished(result),
        }
    }
}

async fn run_request(service: &dyn LeaderboardService, request: ServiceRequest, limit: Duration) -> Completion {
    match request {
        ServiceRequest::LoadTop { limit: count } => Completion::Loaded(bounded(limit, service.load_top(count)).await),
        ServiceRequest::Submit(submission) => Completion::Submitted(bounded(limit, service.submit(&submission)).await),
    }
}

async fn bounded<T>(limit: Duration, call: impl Future<Output = Result<T, ServiceError>>) -> Result<T, ServiceError> {
    timeout(limit, call).await.unwrap_or(Err(ServiceError::Timeout))
}
