//! PostgreSQL implementation of CampaignRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use adops_core::entities::Campaign;
use adops_core::traits::{CampaignRepository, RepoResult};
use adops_core::value_objects::Snowflake;

use crate::mappers::CampaignUpdate;
use crate::models::CampaignModel;

use super::error::{campaign_not_found, map_db_error};

/// PostgreSQL implementation of CampaignRepository
#[derive(Clone)]
pub struct PgCampaignRepository {
    pool: PgPool,
}

impl PgCampaignRepository {
    /// Create a new PgCampaignRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CampaignRepository for PgCampaignRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Campaign>> {
        let result = sqlx::query_as::<_, CampaignModel>(
            r"
            SELECT id, account_id, platform, name, status, budget_total,
                   budget_daily_cap, current_daily_budget,
                   allow_auto_budget_adjustments, allow_auto_pause,
                   start_date, end_date, created_at, updated_at
            FROM campaigns
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Campaign::try_from).transpose()
    }

    #[instrument(skip(self, campaign))]
    async fn create(&self, campaign: &Campaign) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO campaigns (id, account_id, platform, name, status, budget_total,
                                   budget_daily_cap, current_daily_budget,
                                   allow_auto_budget_adjustments, allow_auto_pause,
                                   start_date, end_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ",
        )
        .bind(campaign.id.into_inner())
        .bind(campaign.account_id.into_inner())
        .bind(campaign.platform.as_str())
        .bind(&campaign.name)
        .bind(campaign.status.as_str())
        .bind(campaign.budget_total)
        .bind(campaign.budget_daily_cap)
        .bind(campaign.current_daily_budget)
        .bind(campaign.allow_auto_budget_adjustments)
        .bind(campaign.allow_auto_pause)
        .bind(campaign.start_date)
        .bind(campaign.end_date)
        .bind(campaign.created_at)
        .bind(campaign.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, campaign))]
    async fn update(&self, campaign: &Campaign) -> RepoResult<()> {
        let update = CampaignUpdate::new(campaign);

        let result = sqlx::query(
            r"
            UPDATE campaigns
            SET name = $2, status = $3, budget_total = $4, budget_daily_cap = $5,
                current_daily_budget = $6, allow_auto_budget_adjustments = $7,
                allow_auto_pause = $8, updated_at = $9
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.name)
        .bind(update.status)
        .bind(update.budget_total)
        .bind(update.budget_daily_cap)
        .bind(update.current_daily_budget)
        .bind(update.allow_auto_budget_adjustments)
        .bind(update.allow_auto_pause)
        .bind(campaign.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(campaign_not_found(campaign.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count_active(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM campaigns WHERE status = 'active'
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
