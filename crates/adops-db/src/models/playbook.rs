//! Playbook database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for playbooks table
#[derive(Debug, Clone, FromRow)]
pub struct PlaybookModel {
    pub id: i64,
    pub name: String,
    pub objective: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}
