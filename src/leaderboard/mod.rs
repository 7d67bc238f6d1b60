//! Online leaderboard
//!
//! The remote store is append-only and ranked by score. The game talks to it
//! through [`LeaderboardService`] and keeps the last good answer in a
//! [`LeaderboardCache`] so failures only ever leave the board stale.

mod memory;
mod supabase;

pub use memory::{FailureFlags, InMemoryLeaderboard};
pub use supabase::SupabaseLeaderboard;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Maximum number of entries shown on the board
pub const MAX_LEADERBOARD_ENTRIES: usize = 10;

/// Names longer than this are shortened for display
const DISPLAY_NAME_LIMIT: usize = 15;
const DISPLAY_NAME_KEEP: usize = 12;

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "player_name")]
    pub name: String,
    pub score: u64,
    pub level: u32,
    /// Assigned by the store; absent until the entry has been persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl LeaderboardEntry {
    /// Name as shown on the board, shortened with an ellipsis when long
    pub fn display_name(&self) -> String {
        if self.name.chars().count() > DISPLAY_NAME_LIMIT {
            let kept: String = self.name.chars().take(DISPLAY_NAME_KEEP).collect();
            format!("{kept}...")
        } else {
            self.name.clone()
        }
    }
}

/// Payload for a new leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSubmission {
    #[serde(rename = "player_name")]
    pub name: String,
    pub score: u64,
    pub level: u32,
}

impl ScoreSubmission {
    /// Trims the name; rejects it locally if nothing is left
    pub fn new(name: &str, score: u64, level: u32) -> Result<Self, ServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ServiceError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            score,
            level,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Submission rejected before any network call
    EmptyName,
    Transport(String),
    Upstream { status: u16, message: Option<String> },
    Decode(String),
    Timeout,
}

impl ServiceError {
    /// Validation failures are the caller's fault; everything else means the
    /// service is unavailable
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::EmptyName)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::EmptyName => write!(f, "player name is empty"),
            ServiceError::Transport(err) => write!(f, "leaderboard transport error: {err}"),
            ServiceError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "leaderboard upstream error {status}: {message}")
                } else {
                    write!(f, "leaderboard upstream error {status}")
                }
            }
            ServiceError::Decode(err) => write!(f, "leaderboard response decode error: {err}"),
            ServiceError::Timeout => write!(f, "leaderboard request timed out"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Remote ranked-score store
#[async_trait]
pub trait LeaderboardService: Send + Sync {
    /// Up to `limit` entries, highest score first
    async fn load_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ServiceError>;

    /// Append one entry
    async fn submit(&self, submission: &ScoreSubmission) -> Result<(), ServiceError>;
}

/// Last successfully loaded leaderboard
#[derive(Debug, Clone)]
pub struct LeaderboardCache {
    entries: Vec<LeaderboardEntry>,
    loaded: bool,
    capacity: usize,
}

impl Default for LeaderboardCache {
    fn default() -> Self {
        Self::new(MAX_LEADERBOARD_ENTRIES)
    }
}

impl LeaderboardCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            loaded: false,
            capacity,
        }
    }

    /// Swap in a fresh load, sorted descending by score and trimmed to capacity
    pub fn replace(&mut self, mut entries: Vec<LeaderboardEntry>) {
        // Stable: equal scores keep the store's order
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(self.capacity);
        self.entries = entries;
        self.loaded = true;
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// False until the first successful load
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Rank a score would take on the current board (1-indexed), None if it
    /// would not make the cut
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let rank = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len())
            + 1;
        (rank <= self.capacity).then_some(rank)
    }
}
