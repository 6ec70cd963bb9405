//! Audit trail service
//!
//! Bounded reads over the append-only campaign change log.

use tracing::instrument;

use adops_core::entities::CampaignChangeLog;
use adops_core::traits::ChangeLogQuery;
use adops_core::Snowflake;

use super::context::ServiceContext;
use super::error::ServiceResult;

const DEFAULT_CHANGES_LIMIT: i64 = 50;
const MAX_CHANGES_LIMIT: i64 = 200;

/// Campaign change log service
pub struct ChangeLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChangeLogService<'a> {
    /// Create a new ChangeLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Recent audit records, optionally filtered by campaign and/or account
    #[instrument(skip(self))]
    pub async fn recent_changes(
        &self,
        campaign_id: Option<Snowflake>,
        account_id: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<CampaignChangeLog>> {
        let query = ChangeLogQuery {
            campaign_id,
            account_id,
            limit: limit
                .unwrap_or(DEFAULT_CHANGES_LIMIT)
                .clamp(1, MAX_CHANGES_LIMIT),
        };

        Ok(self.ctx.change_log_repo().find_recent(query).await?)
    }
}
