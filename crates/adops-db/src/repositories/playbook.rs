//! PostgreSQL implementation of PlaybookRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use adops_core::entities::Playbook;
use adops_core::traits::{PlaybookRepository, RepoResult};
use adops_core::value_objects::Snowflake;

use crate::models::PlaybookModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PlaybookRepository
#[derive(Clone)]
pub struct PgPlaybookRepository {
    pool: PgPool,
}

impl PgPlaybookRepository {
    /// Create a new PgPlaybookRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaybookRepository for PgPlaybookRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Playbook>> {
        let result = sqlx::query_as::<_, PlaybookModel>(
            r"
            SELECT id, name, objective, platform, created_at
            FROM playbooks
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Playbook::try_from).transpose()
    }

    #[instrument(skip(self, playbook))]
    async fn create(&self, playbook: &Playbook) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO playbooks (id, name, objective, platform, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(playbook.id.into_inner())
        .bind(&playbook.name)
        .bind(&playbook.objective)
        .bind(playbook.platform.as_str())
        .bind(playbook.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
