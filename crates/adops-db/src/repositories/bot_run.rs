//! PostgreSQL implementation of BotRunRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use adops_core::entities::BotRun;
use adops_core::traits::{BotRunRepository, RepoResult, RunWindow};
use adops_core::value_objects::Snowflake;

use crate::mappers::BotRunInsert;
use crate::models::BotRunModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BotRunRepository
#[derive(Clone)]
pub struct PgBotRunRepository {
    pool: PgPool,
}

impl PgBotRunRepository {
    /// Create a new PgBotRunRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BotRunRepository for PgBotRunRepository {
    #[instrument(skip(self, run))]
    async fn create(&self, run: &BotRun) -> RepoResult<()> {
        let insert = BotRunInsert::new(run)?;

        sqlx::query(
            r"
            INSERT INTO bot_runs (id, bot_id, playbook_id, account_ids, platform,
                                  started_at, finished_at, actions, status, errors)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(insert.id)
        .bind(insert.bot_id)
        .bind(insert.playbook_id)
        .bind(&insert.account_ids)
        .bind(insert.platform)
        .bind(run.started_at)
        .bind(run.finished_at)
        .bind(&insert.actions)
        .bind(insert.status)
        .bind(insert.errors)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_completed_in_window(
        &self,
        window: RunWindow,
        limit: i64,
    ) -> RepoResult<Vec<BotRun>> {
        let results = sqlx::query_as::<_, BotRunModel>(
            r"
            SELECT id, bot_id, playbook_id, account_ids, platform,
                   started_at, finished_at, actions, status, errors
            FROM bot_runs
            WHERE status = 'completed'
              AND started_at >= $1
              AND started_at <= $2
            ORDER BY started_at DESC
            LIMIT $3
            ",
        )
        .bind(window.start)
        .bind(window.end)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(BotRun::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_recent(
        &self,
        account_id: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<BotRun>> {
        let results = sqlx::query_as::<_, BotRunModel>(
            r"
            SELECT id, bot_id, playbook_id, account_ids, platform,
                   started_at, finished_at, actions, status, errors
            FROM bot_runs
            WHERE ($1::BIGINT IS NULL OR $1 = ANY(account_ids))
            ORDER BY started_at DESC
            LIMIT $2
            ",
        )
        .bind(account_id.map(Snowflake::into_inner))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(BotRun::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn latest_started_at(&self) -> RepoResult<Option<DateTime<Utc>>> {
        let result = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            r"
            SELECT MAX(started_at) FROM bot_runs
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
