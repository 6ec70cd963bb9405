//! PostgreSQL implementation of ChangeLogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use adops_core::entities::CampaignChangeLog;
use adops_core::traits::{ChangeLogQuery, ChangeLogRepository, RepoResult};
use adops_core::value_objects::Snowflake;

use crate::mappers::ChangeLogInsert;
use crate::models::ChangeLogModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChangeLogRepository
#[derive(Clone)]
pub struct PgChangeLogRepository {
    pool: PgPool,
}

impl PgChangeLogRepository {
    /// Create a new PgChangeLogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChangeLogRepository for PgChangeLogRepository {
    #[instrument(skip(self, entry))]
    async fn create(&self, entry: &CampaignChangeLog) -> RepoResult<()> {
        let insert = ChangeLogInsert::new(entry);

        sqlx::query(
            r"
            INSERT INTO campaign_change_logs (id, campaign_id, account_id,
                                              old_daily_budget, new_daily_budget,
                                              old_status, new_status, source,
                                              bot_id, run_id, reasons, changed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(insert.id)
        .bind(insert.campaign_id)
        .bind(insert.account_id)
        .bind(insert.old_daily_budget)
        .bind(insert.new_daily_budget)
        .bind(insert.old_status)
        .bind(insert.new_status)
        .bind(insert.source)
        .bind(insert.bot_id)
        .bind(insert.run_id)
        .bind(insert.reasons)
        .bind(entry.changed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_recent(&self, query: ChangeLogQuery) -> RepoResult<Vec<CampaignChangeLog>> {
        let results = sqlx::query_as::<_, ChangeLogModel>(
            r"
            SELECT id, campaign_id, account_id, old_daily_budget, new_daily_budget,
                   old_status, new_status, source, bot_id, run_id, reasons, changed_at
            FROM campaign_change_logs
            WHERE ($1::BIGINT IS NULL OR campaign_id = $1)
              AND ($2::BIGINT IS NULL OR account_id = $2)
            ORDER BY changed_at DESC
            LIMIT $3
            ",
        )
        .bind(query.campaign_id.map(Snowflake::into_inner))
        .bind(query.account_id.map(Snowflake::into_inner))
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(CampaignChangeLog::try_from).collect()
    }
}
