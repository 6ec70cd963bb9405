//! BotRun entity - immutable record of one bot execution and its actions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Platform;
use crate::value_objects::Snowflake;

/// Kind of recommendation a bot can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ScaleUp,
    Pause,
    DuplicateToNewAudience,
    NewCreative,
    BudgetCut,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScaleUp => "scale_up",
            Self::Pause => "pause",
            Self::DuplicateToNewAudience => "duplicate_to_new_audience",
            Self::NewCreative => "new_creative",
            Self::BudgetCut => "budget_cut",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scale_up" => Some(Self::ScaleUp),
            "pause" => Some(Self::Pause),
            "duplicate_to_new_audience" => Some(Self::DuplicateToNewAudience),
            "new_creative" => Some(Self::NewCreative),
            "budget_cut" => Some(Self::BudgetCut),
            _ => None,
        }
    }

    /// Kinds this engine can execute against a campaign
    ///
    /// The remaining kinds are informational/creative recommendations.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::ScaleUp | Self::BudgetCut | Self::Pause)
    }

    /// Kinds that adjust the daily budget
    pub fn is_budget_change(&self) -> bool {
        matches!(self, Self::ScaleUp | Self::BudgetCut)
    }
}

/// A single typed recommendation embedded in a BotRun
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<Snowflake>,
    pub reason: String,
    /// Signed magnitude of a scale/cut, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<i32>,
}

impl Action {
    /// Whether the execution engine can act on this recommendation
    ///
    /// Actions with no campaign target are not actionable.
    pub fn is_actionable(&self) -> bool {
        self.kind.is_executable() && self.campaign_id.is_some()
    }
}

/// Run-level outcome status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Failed,
    Partial,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Partial => "partial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "failed" => Some(Self::Failed),
            "partial" => Some(Self::Partial),
            _ => None,
        }
    }
}

/// BotRun entity - append-only audit record, never mutated after creation
#[derive(Debug, Clone, PartialEq)]
pub struct BotRun {
    pub id: Snowflake,
    pub bot_id: Snowflake,
    pub playbook_id: Option<Snowflake>,
    pub account_ids: Vec<Snowflake>,
    pub platform: Platform,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub actions: Vec<Action>,
    pub status: RunStatus,
    pub errors: Vec<String>,
}
