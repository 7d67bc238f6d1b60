//! Hosted leaderboard over the Supabase REST API

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use super::{LeaderboardEntry, LeaderboardService, ScoreSubmission, ServiceError};

// Thin wrapper around reqwest for the hosted leaderboard table (PostgREST API).
#[derive(Clone)]
pub struct SupabaseLeaderboard {
    http: Client,
    pub base_url: String,
    api_key: String,
    pub table: String,
}

#[derive(Debug, Deserialize)]
struct RestErrorResponse {
    message: String,
}

impl SupabaseLeaderboard {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, table: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: table.into(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn top_url(&self, limit: usize) -> String {
        format!("{}?select=*&order=score.desc&limit={limit}", self.table_url())
    }

    /// Keep upstream status/message so callers can log what went wrong.
    async fn check(res: Response) -> Result<Response, ServiceError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let message = res
            .json::<RestErrorResponse>()
            .await
            .ok()
            .map(|payload| payload.message);
        Err(ServiceError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl LeaderboardService for SupabaseLeaderboard {
    async fn load_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        let res = self
            .http
            .get(self.top_url(limit))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        let res = Self::check(res).await?;

        res.json::<Vec<LeaderboardEntry>>()
            .await
            .map_err(|err| ServiceError::Decode(err.to_string()))
    }

    async fn submit(&self, submission: &ScoreSubmission) -> Result<(), ServiceError> {
        if submission.name.trim().is_empty() {
            return Err(ServiceError::EmptyName);
        }

        // The store stamps created_at itself.
        let res = self
            .http
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(submission)
            .send()
            .await
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        Self::check(res).await?;
        Ok(())
    }
}
