//! Action execution engine
//!
//! Applies recent actionable recommendations to campaigns: budget scaling,
//! budget cuts, and pauses, gated by per-campaign consent flags. Dry-run
//! mode computes and logs every change without persisting anything.

use chrono::{DateTime, Duration, Utc};
use tracing::{info, instrument};

use adops_core::budget;
use adops_core::entities::{ActionKind, Campaign, CampaignChangeLog, ChangeSource};
use adops_core::traits::RunWindow;
use adops_core::Snowflake;

use super::aggregator::{ActionAggregator, CampaignActionGroup};
use super::context::ServiceContext;
use super::error::ServiceResult;

/// One action the engine declined to apply
#[derive(Debug, Clone)]
pub struct SkippedAction {
    pub campaign_id: Snowflake,
    pub kind: ActionKind,
    pub reason: &'static str,
}

/// Outcome of one execution pass
#[derive(Debug, Clone)]
pub struct ApplyActionsOutcome {
    pub actions_processed: i64,
    pub campaigns_updated: i64,
    pub pauses_applied: i64,
    pub budget_increases: i64,
    pub budget_cuts: i64,
    pub dry_run: bool,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub skipped: Vec<SkippedAction>,
}

impl ApplyActionsOutcome {
    fn empty(window: RunWindow, dry_run: bool) -> Self {
        Self {
            actions_processed: 0,
            campaigns_updated: 0,
            pauses_applied: 0,
            budget_increases: 0,
            budget_cuts: 0,
            dry_run,
            window_start: window.start,
            window_end: window.end,
            skipped: Vec::new(),
        }
    }
}

/// Action execution service
pub struct ExecutionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExecutionService<'a> {
    /// Create a new ExecutionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply actionable recommendations from the last `hours_back` hours
    ///
    /// A non-positive or missing `hours_back` falls back to the configured
    /// default. Store errors during the campaign loop propagate; mutations
    /// already persisted stay persisted.
    #[instrument(skip(self))]
    pub async fn apply_recent_actions(
        &self,
        hours_back: Option<i64>,
        dry_run: bool,
    ) -> ServiceResult<ApplyActionsOutcome> {
        let hours = match hours_back {
            Some(h) if h > 0 => h,
            _ => self.ctx.execution_config().default_hours_back,
        };

        let now = Utc::now();
        let window = RunWindow {
            start: now - Duration::hours(hours),
            end: now,
        };

        let groups = ActionAggregator::new(self.ctx)
            .collect_actionable(window)
            .await?;

        if groups.is_empty() {
            info!(hours, "no actionable recommendations in window");
            return Ok(ApplyActionsOutcome::empty(window, dry_run));
        }

        let mut outcome = ApplyActionsOutcome::empty(window, dry_run);

        for group in &groups {
            self.apply_group(group, now, &mut outcome).await?;
        }

        info!(
            actions_processed = outcome.actions_processed,
            campaigns_updated = outcome.campaigns_updated,
            pauses_applied = outcome.pauses_applied,
            budget_increases = outcome.budget_increases,
            budget_cuts = outcome.budget_cuts,
            skipped = outcome.skipped.len(),
            dry_run,
            "execution pass finished"
        );

        Ok(outcome)
    }

    /// Apply one campaign's pending actions
    async fn apply_group(
        &self,
        group: &CampaignActionGroup,
        now: DateTime<Utc>,
        outcome: &mut ApplyActionsOutcome,
    ) -> ServiceResult<()> {
        let Some(mut campaign) = self.ctx.campaign_repo().find_by_id(group.campaign_id).await?
        else {
            // Stale recommendation; skip the whole group
            for pending in &group.actions {
                outcome.skipped.push(SkippedAction {
                    campaign_id: group.campaign_id,
                    kind: pending.action.kind,
                    reason: "campaign not found",
                });
            }
            return Ok(());
        };

        let old_budget = campaign.current_daily_budget;
        let old_status = campaign.status;
        let mut working = campaign.working_daily_budget();
        let mut budget_changed = false;
        let mut paused = false;
        let mut trigger: Option<(Snowflake, Snowflake)> = None;
        let mut reasons: Vec<String> = Vec::new();

        for pending in &group.actions {
            outcome.actions_processed += 1;
            let kind = pending.action.kind;

            match kind {
                ActionKind::ScaleUp | ActionKind::BudgetCut => {
                    if !campaign.allows_budget_changes() {
                        outcome.skipped.push(SkippedAction {
                            campaign_id: campaign.id,
                            kind,
                            reason: "auto budget adjustments not allowed",
                        });
                        continue;
                    }

                    let percent = pending
                        .action
                        .percent
                        .unwrap_or(budget::DEFAULT_CHANGE_PERCENT);
                    working = budget::apply_percent_change(
                        working,
                        percent,
                        kind == ActionKind::ScaleUp,
                    );

                    if kind == ActionKind::ScaleUp {
                        outcome.budget_increases += 1;
                    } else {
                        outcome.budget_cuts += 1;
                    }
                    budget_changed = true;
                    trigger.get_or_insert((pending.bot_id, pending.run_id));
                    reasons.push(pending.action.reason.clone());
                }
                ActionKind::Pause => {
                    if !campaign.allows_pause() {
                        outcome.skipped.push(SkippedAction {
                            campaign_id: campaign.id,
                            kind,
                            reason: "auto pause not allowed",
                        });
                        continue;
                    }
                    if !campaign.is_active() {
                        outcome.skipped.push(SkippedAction {
                            campaign_id: campaign.id,
                            kind,
                            reason: "campaign not active",
                        });
                        continue;
                    }

                    campaign.pause(now);
                    paused = true;
                    outcome.pauses_applied += 1;
                    trigger.get_or_insert((pending.bot_id, pending.run_id));
                    reasons.push(pending.action.reason.clone());
                }
                // The aggregator only emits executable kinds
                ActionKind::DuplicateToNewAudience | ActionKind::NewCreative => {}
            }
        }

        if !budget_changed && !paused {
            return Ok(());
        }

        if budget_changed {
            let final_budget = budget::clamp_daily_budget(working, campaign.budget_total);
            campaign.set_daily_budget(final_budget, now);
        }
        outcome.campaigns_updated += 1;

        if outcome.dry_run {
            info!(
                campaign_id = %campaign.id,
                old_budget,
                new_budget = campaign.current_daily_budget,
                old_status = old_status.as_str(),
                new_status = campaign.status.as_str(),
                "dry run: campaign change computed but not persisted"
            );
            return Ok(());
        }

        self.ctx.campaign_repo().update(&campaign).await?;

        let (bot_id, run_id) = match trigger {
            Some((bot_id, run_id)) => (Some(bot_id), Some(run_id)),
            None => (None, None),
        };

        let entry = CampaignChangeLog {
            id: self.ctx.generate_id(),
            campaign_id: campaign.id,
            account_id: campaign.account_id,
            old_daily_budget: old_budget,
            new_daily_budget: campaign.current_daily_budget,
            old_status,
            new_status: campaign.status,
            source: ChangeSource::Bot,
            bot_id,
            run_id,
            reasons,
            changed_at: now,
        };
        self.ctx.change_log_repo().create(&entry).await?;

        info!(
            campaign_id = %campaign.id,
            change_log_id = %entry.id,
            old_budget,
            new_budget = campaign.current_daily_budget,
            "campaign updated"
        );

        Ok(())
    }
}
