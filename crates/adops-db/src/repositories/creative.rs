//! PostgreSQL implementation of CreativeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use adops_core::traits::{CreativeRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of CreativeRepository
///
/// Creatives are owned by another system; this engine only reads the count
/// for the orchestration summary.
#[derive(Clone)]
pub struct PgCreativeRepository {
    pool: PgPool,
}

impl PgCreativeRepository {
    /// Create a new PgCreativeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreativeRepository for PgCreativeRepository {
    #[instrument(skip(self))]
    async fn count_active(&self) -> RepoResult<i64> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM creatives WHERE status = 'active'
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
