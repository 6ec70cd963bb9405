//! CampaignChangeLog entity - immutable audit trail of applied mutations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::CampaignStatus;
use crate::value_objects::Snowflake;

/// Who triggered a campaign mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeSource {
    Bot,
    Manual,
    System,
}

impl ChangeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bot => "bot",
            Self::Manual => "manual",
            Self::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bot" => Some(Self::Bot),
            "manual" => Some(Self::Manual),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// One audit record per applied campaign mutation
///
/// Written exactly once; never updated or deleted by this engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignChangeLog {
    pub id: Snowflake,
    pub campaign_id: Snowflake,
    pub account_id: Snowflake,
    pub old_daily_budget: f64,
    pub new_daily_budget: f64,
    pub old_status: CampaignStatus,
    pub new_status: CampaignStatus,
    pub source: ChangeSource,
    pub bot_id: Option<Snowflake>,
    pub run_id: Option<Snowflake>,
    pub reasons: Vec<String>,
    pub changed_at: DateTime<Utc>,
}
