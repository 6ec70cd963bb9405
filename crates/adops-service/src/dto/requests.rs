//! Request DTOs for API endpoints
//!
//! Wire casing is camelCase. Out-of-range values are clamped or defaulted
//! by the services rather than rejected.

use serde::Deserialize;
use validator::Validate;

use adops_core::Snowflake;

/// Query parameters for triggering a scheduling pass
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDueQuery {
    /// Bots to run this pass; clamped to [1, 500]
    pub max_bots: Option<i64>,
}

/// Query parameters for listing recent runs
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunsQuery {
    /// Owning account filter
    pub artist_id: Option<Snowflake>,
    /// Page size; default 20, clamped to 200
    pub limit: Option<i64>,
}

/// Body for triggering an execution pass
///
/// `dryRun` defaults to true so a bare POST never mutates campaigns.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyActionsRequest {
    /// Look-back window in hours; non-positive values fall back to the default
    pub hours_back: Option<i64>,
    pub dry_run: Option<bool>,
}

impl ApplyActionsRequest {
    /// Effective dry-run flag
    pub fn dry_run(&self) -> bool {
        self.dry_run.unwrap_or(true)
    }
}

/// Query parameters for the campaign change audit trail
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesQuery {
    pub artist_id: Option<Snowflake>,
    pub campaign_id: Option<Snowflake>,
    /// Page size; default 50, clamped to 200
    pub limit: Option<i64>,
}
