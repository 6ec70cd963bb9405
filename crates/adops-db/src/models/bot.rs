//! Bot database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for bots table
#[derive(Debug, Clone, FromRow)]
pub struct BotModel {
    pub id: i64,
    pub name: String,
    pub division: String,
    pub role: String,
    pub platform: String,
    pub status: String,
    pub assigned_account_ids: Vec<i64>,
    pub playbook_id: Option<i64>,
    pub last_run_at: Option<DateTime<Utc>>,
    pub next_run_after: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BotModel {
    /// Check if this bot is currently schedulable
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
