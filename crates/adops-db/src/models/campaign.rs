//! Campaign database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for campaigns table
#[derive(Debug, Clone, FromRow)]
pub struct CampaignModel {
    pub id: i64,
    pub account_id: i64,
    pub platform: String,
    pub name: String,
    pub status: String,
    pub budget_total: f64,
    pub budget_daily_cap: f64,
    pub current_daily_budget: f64,
    pub allow_auto_budget_adjustments: bool,
    pub allow_auto_pause: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CampaignModel {
    /// Check if the campaign is currently delivering
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
