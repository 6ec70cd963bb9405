//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! field names. Snowflake IDs are serialized as strings for JavaScript
//! compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use adops_core::entities::{
    Action, ActionKind, BotRun, CampaignChangeLog, CampaignStatus, ChangeSource, Platform,
    RunStatus,
};
use adops_core::Snowflake;

use crate::services::{
    ApplyActionsOutcome, OrchestrationSummary, RunDueBotsOutcome, SkippedAction,
};

// ============================================================================
// Orchestration Responses
// ============================================================================

/// Result of one scheduling pass
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDueBotsResponse {
    pub bots_run: i64,
    pub actions_produced: i64,
    pub error_count: i64,
    pub errors: Vec<String>,
    pub bot_ids: Vec<Snowflake>,
}

impl From<RunDueBotsOutcome> for RunDueBotsResponse {
    fn from(outcome: RunDueBotsOutcome) -> Self {
        Self {
            bots_run: outcome.bots_run,
            actions_produced: outcome.actions_produced,
            error_count: outcome.errors.len() as i64,
            errors: outcome.errors,
            bot_ids: outcome.bot_ids,
        }
    }
}

/// Orchestration summary counts
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub active_bots: i64,
    pub active_campaigns: i64,
    pub active_creatives: i64,
    pub last_run_at: Option<DateTime<Utc>>,
}

impl From<OrchestrationSummary> for SummaryResponse {
    fn from(summary: OrchestrationSummary) -> Self {
        Self {
            active_bots: summary.active_bots,
            active_campaigns: summary.active_campaigns,
            active_creatives: summary.active_creatives,
            last_run_at: summary.last_run_at,
        }
    }
}

/// One recommendation inside a run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub kind: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<Snowflake>,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<i32>,
}

impl From<Action> for ActionResponse {
    fn from(action: Action) -> Self {
        Self {
            kind: action.kind,
            campaign_id: action.campaign_id,
            creative_id: action.creative_id,
            reason: action.reason,
            percent: action.percent,
        }
    }
}

/// One bot run with its recommendations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRunResponse {
    pub id: Snowflake,
    pub bot_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playbook_id: Option<Snowflake>,
    pub account_ids: Vec<Snowflake>,
    pub platform: Platform,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub actions: Vec<ActionResponse>,
    pub status: RunStatus,
    pub errors: Vec<String>,
}

impl From<BotRun> for BotRunResponse {
    fn from(run: BotRun) -> Self {
        Self {
            id: run.id,
            bot_id: run.bot_id,
            playbook_id: run.playbook_id,
            account_ids: run.account_ids,
            platform: run.platform,
            started_at: run.started_at,
            finished_at: run.finished_at,
            actions: run.actions.into_iter().map(ActionResponse::from).collect(),
            status: run.status,
            errors: run.errors,
        }
    }
}

// ============================================================================
// Execution Responses
// ============================================================================

/// One action the engine declined to apply
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedActionResponse {
    pub campaign_id: Snowflake,
    pub kind: ActionKind,
    pub reason: &'static str,
}

impl From<SkippedAction> for SkippedActionResponse {
    fn from(skip: SkippedAction) -> Self {
        Self {
            campaign_id: skip.campaign_id,
            kind: skip.kind,
            reason: skip.reason,
        }
    }
}

/// Result of one execution pass
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyActionsResponse {
    pub actions_processed: i64,
    pub campaigns_updated: i64,
    pub pauses_applied: i64,
    pub budget_increases: i64,
    pub budget_cuts: i64,
    pub dry_run: bool,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub skipped: Vec<SkippedActionResponse>,
}

impl From<ApplyActionsOutcome> for ApplyActionsResponse {
    fn from(outcome: ApplyActionsOutcome) -> Self {
        Self {
            actions_processed: outcome.actions_processed,
            campaigns_updated: outcome.campaigns_updated,
            pauses_applied: outcome.pauses_applied,
            budget_increases: outcome.budget_increases,
            budget_cuts: outcome.budget_cuts,
            dry_run: outcome.dry_run,
            window_start: outcome.window_start,
            window_end: outcome.window_end,
            skipped: outcome
                .skipped
                .into_iter()
                .map(SkippedActionResponse::from)
                .collect(),
        }
    }
}

// ============================================================================
// Audit Responses
// ============================================================================

/// One campaign change audit record
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogResponse {
    pub id: Snowflake,
    pub campaign_id: Snowflake,
    pub artist_id: Snowflake,
    pub old_daily_budget: f64,
    pub new_daily_budget: f64,
    pub old_status: CampaignStatus,
    pub new_status: CampaignStatus,
    pub source: ChangeSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Snowflake>,
    pub reasons: Vec<String>,
    pub changed_at: DateTime<Utc>,
}

impl From<CampaignChangeLog> for ChangeLogResponse {
    fn from(log: CampaignChangeLog) -> Self {
        Self {
            id: log.id,
            campaign_id: log.campaign_id,
            artist_id: log.account_id,
            old_daily_budget: log.old_daily_budget,
            new_daily_budget: log.new_daily_budget,
            old_status: log.old_status,
            new_status: log.new_status,
            source: log.source,
            bot_id: log.bot_id,
            run_id: log.run_id,
            reasons: log.reasons,
            changed_at: log.changed_at,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
