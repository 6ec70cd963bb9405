//! Bot scheduler service
//!
//! Runs due bots in bounded batches, records their runs, and reschedules
//! them. Also serves the orchestration summary and recent-run queries.

use chrono::{Duration, Utc};
use tracing::{info, instrument, warn};

use adops_core::entities::{BotRun, RunStatus};
use adops_core::Snowflake;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Hard bounds on one scheduling pass
const MIN_BOTS_PER_PASS: i64 = 1;
const MAX_BOTS_PER_PASS: i64 = 500;

/// Bounds on recent-run reads
const DEFAULT_RUNS_LIMIT: i64 = 20;
const MAX_RUNS_LIMIT: i64 = 200;

/// Outcome of one scheduling pass
#[derive(Debug, Clone, Default)]
pub struct RunDueBotsOutcome {
    pub bots_run: i64,
    pub actions_produced: i64,
    pub errors: Vec<String>,
    pub bot_ids: Vec<Snowflake>,
}

/// Counts for the orchestration summary
#[derive(Debug, Clone)]
pub struct OrchestrationSummary {
    pub active_bots: i64,
    pub active_campaigns: i64,
    pub active_creatives: i64,
    pub last_run_at: Option<chrono::DateTime<Utc>>,
}

/// Bot scheduler service
pub struct SchedulerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SchedulerService<'a> {
    /// Create a new SchedulerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run every due bot, up to `max_bots` in this pass
    ///
    /// Per-bot failures are recorded in the outcome and never abort the
    /// batch. The run record and the bot reschedule are two separate writes;
    /// a crash between them costs at most one redundant future run.
    #[instrument(skip(self))]
    pub async fn run_due_bots(&self, max_bots: Option<i64>) -> ServiceResult<RunDueBotsOutcome> {
        let limit = max_bots
            .unwrap_or(self.ctx.scheduler_config().default_max_bots)
            .clamp(MIN_BOTS_PER_PASS, MAX_BOTS_PER_PASS);

        let now = Utc::now();
        let due = self.ctx.bot_repo().find_due(now, limit).await?;

        info!(due = due.len(), limit, "scheduling pass started");

        let interval = Duration::seconds(self.ctx.scheduler_config().run_interval_secs);
        let mut outcome = RunDueBotsOutcome::default();

        for bot in due {
            match self.run_one(&bot, interval).await {
                Ok(actions) => {
                    outcome.bots_run += 1;
                    outcome.actions_produced += actions;
                    outcome.bot_ids.push(bot.id);
                }
                Err(e) => {
                    warn!(bot_id = %bot.id, error = %e, "bot run failed");
                    outcome.errors.push(format!("bot {}: {e}", bot.id));
                }
            }
        }

        info!(
            bots_run = outcome.bots_run,
            actions_produced = outcome.actions_produced,
            errors = outcome.errors.len(),
            "scheduling pass finished"
        );

        Ok(outcome)
    }

    /// Execute one bot and persist the results
    ///
    /// Returns the number of actions the bot produced.
    async fn run_one(
        &self,
        bot: &adops_core::entities::Bot,
        interval: Duration,
    ) -> ServiceResult<i64> {
        let playbook = match bot.playbook_id {
            Some(id) => self.ctx.playbook_repo().find_by_id(id).await?,
            None => None,
        };

        let started_at = Utc::now();
        let result = self.ctx.bot_logic().execute(bot, playbook.as_ref()).await;
        let finished_at = Utc::now();

        let (actions, status, errors) = match result {
            Ok(output) if output.errors.is_empty() => (output.actions, RunStatus::Completed, vec![]),
            Ok(output) => (output.actions, RunStatus::Partial, output.errors),
            Err(e) => (vec![], RunStatus::Failed, vec![e.to_string()]),
        };

        let run = BotRun {
            id: self.ctx.generate_id(),
            bot_id: bot.id,
            playbook_id: bot.playbook_id,
            account_ids: bot.assigned_account_ids.clone(),
            platform: bot.platform,
            started_at,
            finished_at,
            actions,
            status,
            errors,
        };
        let action_count = run.actions.len() as i64;

        self.ctx.run_repo().create(&run).await?;
        self.ctx
            .bot_repo()
            .record_run(bot.id, started_at, started_at + interval)
            .await?;

        info!(bot_id = %bot.id, run_id = %run.id, status = status.as_str(), actions = action_count, "bot ran");

        Ok(action_count)
    }

    /// Counts of active bots, campaigns, and creatives plus the last run time
    #[instrument(skip(self))]
    pub async fn summary(&self) -> ServiceResult<OrchestrationSummary> {
        let active_bots = self.ctx.bot_repo().count_active().await?;
        let active_campaigns = self.ctx.campaign_repo().count_active().await?;
        let active_creatives = self.ctx.creative_repo().count_active().await?;
        let last_run_at = self.ctx.run_repo().latest_started_at().await?;

        Ok(OrchestrationSummary {
            active_bots,
            active_campaigns,
            active_creatives,
            last_run_at,
        })
    }

    /// Recent runs, optionally filtered to one account
    #[instrument(skip(self))]
    pub async fn recent_runs(
        &self,
        account_id: Option<Snowflake>,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<BotRun>> {
        let limit = limit
            .unwrap_or(DEFAULT_RUNS_LIMIT)
            .clamp(1, MAX_RUNS_LIMIT);

        Ok(self.ctx.run_repo().find_recent(account_id, limit).await?)
    }
}
