//! Campaign entity - the only mutable shared resource in the engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Platform;
use crate::value_objects::Snowflake;

/// Campaign lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Campaign entity
///
/// Budget fields are in currency units. A `current_daily_budget` of zero
/// means "use the daily cap".
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: Snowflake,
    pub account_id: Snowflake,
    pub platform: Platform,
    pub name: String,
    pub status: CampaignStatus,
    pub budget_total: f64,
    pub budget_daily_cap: f64,
    pub current_daily_budget: f64,
    /// Consent flag: automated scale-up/cut of the daily budget
    pub allow_auto_budget_adjustments: bool,
    /// Consent flag: automated pausing
    pub allow_auto_pause: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    /// The effective daily budget automated adjustments start from
    pub fn working_daily_budget(&self) -> f64 {
        if self.current_daily_budget > 0.0 {
            self.current_daily_budget
        } else {
            self.budget_daily_cap
        }
    }

    /// Policy gate: may the engine change this campaign's budget?
    #[inline]
    pub fn allows_budget_changes(&self) -> bool {
        self.allow_auto_budget_adjustments
    }

    /// Policy gate: may the engine pause this campaign?
    #[inline]
    pub fn allows_pause(&self) -> bool {
        self.allow_auto_pause
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }

    /// Set the daily budget after an automated adjustment
    pub fn set_daily_budget(&mut self, value: f64, now: DateTime<Utc>) {
        self.current_daily_budget = value;
        self.updated_at = now;
    }

    /// Pause the campaign
    pub fn pause(&mut self, now: DateTime<Utc>) {
        self.status = CampaignStatus::Paused;
        self.updated_at = now;
    }
}
