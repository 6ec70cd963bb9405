//! PostgreSQL implementation of BotRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use adops_core::entities::{Bot, BotStatus};
use adops_core::traits::{BotRepository, RepoResult};
use adops_core::value_objects::Snowflake;

use crate::mappers::BotInsert;
use crate::models::BotModel;

use super::error::{bot_not_found, map_db_error};

/// PostgreSQL implementation of BotRepository
#[derive(Clone)]
pub struct PgBotRepository {
    pool: PgPool,
}

impl PgBotRepository {
    /// Create a new PgBotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BotRepository for PgBotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Bot>> {
        let result = sqlx::query_as::<_, BotModel>(
            r"
            SELECT id, name, division, role, platform, status, assigned_account_ids,
                   playbook_id, last_run_at, next_run_after, created_at, updated_at
            FROM bots
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Bot::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_due(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Bot>> {
        let results = sqlx::query_as::<_, BotModel>(
            r"
            SELECT id, name, division, role, platform, status, assigned_account_ids,
                   playbook_id, last_run_at, next_run_after, created_at, updated_at
            FROM bots
            WHERE status = 'active'
              AND (next_run_after IS NULL OR next_run_after <= $1)
            ORDER BY next_run_after ASC NULLS FIRST
            LIMIT $2
            ",
        )
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Bot::try_from).collect()
    }

    #[instrument(skip(self, bot))]
    async fn create(&self, bot: &Bot) -> RepoResult<()> {
        let insert = BotInsert::new(bot);

        sqlx::query(
            r"
            INSERT INTO bots (id, name, division, role, platform, status,
                              assigned_account_ids, playbook_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.division)
        .bind(insert.role)
        .bind(insert.platform)
        .bind(insert.status)
        .bind(&insert.assigned_account_ids)
        .bind(insert.playbook_id)
        .bind(bot.created_at)
        .bind(bot.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_run(
        &self,
        id: Snowflake,
        last_run_at: DateTime<Utc>,
        next_run_after: DateTime<Utc>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bots
            SET last_run_at = $2, next_run_after = $3, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(last_run_at)
        .bind(next_run_after)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(bot_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: Snowflake, status: BotStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE bots
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(bot_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_active(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM bots WHERE status = 'active'
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
