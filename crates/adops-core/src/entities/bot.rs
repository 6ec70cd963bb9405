//! Bot entity - an autonomous scheduled unit that inspects campaign
//! performance and emits recommended actions

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Advertising platform a bot or campaign targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Youtube,
    Meta,
    Tiktok,
    GoogleAds,
}

impl Platform {
    /// Stable string form used for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Meta => "meta",
            Self::Tiktok => "tiktok",
            Self::GoogleAds => "google_ads",
        }
    }

    /// Parse from the stored string form
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "youtube" => Some(Self::Youtube),
            "meta" => Some(Self::Meta),
            "tiktok" => Some(Self::Tiktok),
            "google_ads" => Some(Self::GoogleAds),
            _ => None,
        }
    }
}

/// Bot lifecycle status
///
/// Bots are never deleted, only retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotStatus {
    Active,
    Paused,
    Retired,
}

impl BotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Retired => "retired",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "retired" => Some(Self::Retired),
            _ => None,
        }
    }
}

/// Bot entity
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    pub id: Snowflake,
    pub name: String,
    pub division: String,
    pub role: String,
    pub platform: Platform,
    pub status: BotStatus,
    pub assigned_account_ids: Vec<Snowflake>,
    pub playbook_id: Option<Snowflake>,
    pub last_run_at: Option<DateTime<Utc>>,
    pub next_run_after: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bot {
    /// Check whether this bot is eligible to run now
    ///
    /// A bot is due when it is active and has no scheduled next-run time,
    /// or the scheduled time has passed.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.status == BotStatus::Active
            && self.next_run_after.is_none_or(|next| next <= now)
    }

    /// Record a completed scheduling pass
    pub fn mark_ran(&mut self, now: DateTime<Utc>, interval: Duration) {
        self.last_run_at = Some(now);
        self.next_run_after = Some(now + interval);
        self.updated_at = now;
    }
}
