//! In-process leaderboard for offline play and tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{LeaderboardEntry, LeaderboardService, ScoreSubmission, ServiceError};

/// Calls that should fail, for exercising degraded paths
#[derive(Debug, Clone, Copy, Default)]
pub struct FailureFlags {
    pub load: bool,
    pub submit: bool,
}

#[derive(Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
    failures: Mutex<FailureFlags>,
    submissions: AtomicUsize,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn with_failures(self, failures: FailureFlags) -> Self {
        self.set_failures(failures);
        self
    }

    /// Flip failure injection on a live instance
    pub fn set_failures(&self, failures: FailureFlags) {
        if let Ok(mut guard) = self.failures.lock() {
            *guard = failures;
        }
    }

    /// Accepted submissions so far
    pub fn submission_count(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
    }

    fn failures(&self) -> FailureFlags {
        self.failures.lock().map(|guard| *guard).unwrap_or_default()
    }

    fn poisoned<T>(_: T) -> ServiceError {
        ServiceError::Transport("leaderboard store lock poisoned".to_string())
    }
}

#[async_trait]
impl LeaderboardService for InMemoryLeaderboard {
    async fn load_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        if self.failures().load {
            return Err(ServiceError::Transport("load failed".to_string()));
        }

        let guard = self.entries.lock().map_err(Self::poisoned)?;
        let mut top = guard.clone();
        top.sort_by(|a, b| b.score.cmp(&a.score));
        top.truncate(limit);
        Ok(top)
    }

    async fn submit(&self, submission: &ScoreSubmission) -> Result<(), ServiceError> {
        if submission.name.trim().is_empty() {
            return Err(ServiceError::EmptyName);
        }
        if self.failures().submit {
            return Err(ServiceError::Upstream {
                status: 503,
                message: Some("submit failed".to_string()),
            });
        }

        let mut guard = self.entries.lock().map_err(Self::poisoned)?;
        let stamp = format!("seq-{}", guard.len() + 1);
        guard.push(LeaderboardEntry {
            name: submission.name.clone(),
            score: submission.score,
            level: submission.level,
            created_at: Some(stamp),
        });
        self.submissions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
