//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. All list reads are bounded by a limit to
//! cap worst-case latency.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Bot, BotRun, BotStatus, Campaign, CampaignChangeLog, Playbook};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Inclusive time window over run start times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Filter for change-log reads
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeLogQuery {
    pub campaign_id: Option<Snowflake>,
    pub account_id: Option<Snowflake>,
    pub limit: i64,
}

// ============================================================================
// Bot Repository
// ============================================================================

#[async_trait]
pub trait BotRepository: Send + Sync {
    /// Find bot by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Bot>>;

    /// Select active bots whose next-eligible-run time has passed (or is unset)
    async fn find_due(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Bot>>;

    /// Register a new bot
    async fn create(&self, bot: &Bot) -> RepoResult<()>;

    /// Record a scheduling pass: last run time and next eligibility
    async fn record_run(
        &self,
        id: Snowflake,
        last_run_at: DateTime<Utc>,
        next_run_after: DateTime<Utc>,
    ) -> RepoResult<()>;

    /// Change lifecycle status (external administration; bots are retired, never deleted)
    async fn set_status(&self, id: Snowflake, status: BotStatus) -> RepoResult<()>;

    /// Count bots with Active status
    async fn count_active(&self) -> RepoResult<i64>;
}

// ============================================================================
// Playbook Repository
// ============================================================================

#[async_trait]
pub trait PlaybookRepository: Send + Sync {
    /// Find playbook by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Playbook>>;

    /// Register a new playbook
    async fn create(&self, playbook: &Playbook) -> RepoResult<()>;
}

// ============================================================================
// BotRun Repository
// ============================================================================

#[async_trait]
pub trait BotRunRepository: Send + Sync {
    /// Persist a run record (immutable once written)
    async fn create(&self, run: &BotRun) -> RepoResult<()>;

    /// Completed runs started within the window, most recent first
    async fn find_completed_in_window(
        &self,
        window: RunWindow,
        limit: i64,
    ) -> RepoResult<Vec<BotRun>>;

    /// Recent runs, optionally filtered to an account, most recent first
    async fn find_recent(
        &self,
        account_id: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<BotRun>>;

    /// Start time of the most recent run across all bots
    async fn latest_started_at(&self) -> RepoResult<Option<DateTime<Utc>>>;
}

// ============================================================================
// Campaign Repository
// ============================================================================

#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// Find campaign by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Campaign>>;

    /// Register a new campaign
    async fn create(&self, campaign: &Campaign) -> RepoResult<()>;

    /// Persist a campaign mutation (budget, status, updated_at)
    async fn update(&self, campaign: &Campaign) -> RepoResult<()>;

    /// Count campaigns with Active status
    async fn count_active(&self) -> RepoResult<i64>;
}

// ============================================================================
// ChangeLog Repository
// ============================================================================

#[async_trait]
pub trait ChangeLogRepository: Send + Sync {
    /// Append one audit record (never updated or deleted)
    async fn create(&self, entry: &CampaignChangeLog) -> RepoResult<()>;

    /// Audit records matching the filter, changed_at descending
    async fn find_recent(&self, query: ChangeLogQuery) -> RepoResult<Vec<CampaignChangeLog>>;
}

// ============================================================================
// Creative Repository
// ============================================================================

/// Creatives are managed elsewhere; this engine only reports their count.
#[async_trait]
pub trait CreativeRepository: Send + Sync {
    /// Count creatives with Active status
    async fn count_active(&self) -> RepoResult<i64>;
}
