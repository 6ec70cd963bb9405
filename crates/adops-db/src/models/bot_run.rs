//! Bot run database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bot_runs table
///
/// Recommended actions are stored as a JSONB document; individual actions
/// are never addressed by the database, only whole runs.
#[derive(Debug, Clone, FromRow)]
pub struct BotRunModel {
    pub id: i64,
    pub bot_id: i64,
    pub playbook_id: Option<i64>,
    pub account_ids: Vec<i64>,
    pub platform: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub actions: serde_json::Value,
    pub status: String,
    pub errors: Vec<String>,
}

impl BotRunModel {
    /// Check if the run finished without any errors
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}
