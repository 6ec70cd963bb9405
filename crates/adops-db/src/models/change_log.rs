//! Campaign change log database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for campaign_change_logs table
#[derive(Debug, Clone, FromRow)]
pub struct ChangeLogModel {
    pub id: i64,
    pub campaign_id: i64,
    pub account_id: i64,
    pub old_daily_budget: f64,
    pub new_daily_budget: f64,
    pub old_status: String,
    pub new_status: String,
    pub source: String,
    pub bot_id: Option<i64>,
    pub run_id: Option<i64>,
    pub reasons: Vec<String>,
    pub changed_at: DateTime<Utc>,
}
