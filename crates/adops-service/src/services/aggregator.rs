//! Action aggregator
//!
//! Collects actionable recommendations from recent completed runs and
//! groups them by target campaign, preserving discovery order.

use std::collections::HashMap;

use tracing::instrument;

use adops_core::entities::{Action, BotRun};
use adops_core::traits::RunWindow;
use adops_core::Snowflake;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Runs examined per aggregation window
const MAX_RUNS_PER_WINDOW: i64 = 1000;

/// One actionable recommendation with its provenance
#[derive(Debug, Clone)]
pub struct PendingAction {
    pub action: Action,
    pub bot_id: Snowflake,
    pub run_id: Snowflake,
}

/// All pending actions targeting one campaign, in discovery order
#[derive(Debug, Clone)]
pub struct CampaignActionGroup {
    pub campaign_id: Snowflake,
    pub actions: Vec<PendingAction>,
}

/// Action aggregator service
pub struct ActionAggregator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ActionAggregator<'a> {
    /// Create a new ActionAggregator
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Actionable recommendations from completed runs in the window,
    /// grouped by campaign
    #[instrument(skip(self))]
    pub async fn collect_actionable(
        &self,
        window: RunWindow,
    ) -> ServiceResult<Vec<CampaignActionGroup>> {
        let runs = self
            .ctx
            .run_repo()
            .find_completed_in_window(window, MAX_RUNS_PER_WINDOW)
            .await?;

        Ok(group_actionable(&runs))
    }
}

/// Group the actionable items of the given runs by campaign
///
/// Retains only executable kinds with a campaign target. Group order and
/// the action order within each group follow discovery order across the
/// run list.
pub fn group_actionable(runs: &[BotRun]) -> Vec<CampaignActionGroup> {
    let mut groups: Vec<CampaignActionGroup> = Vec::new();
    let mut index: HashMap<Snowflake, usize> = HashMap::new();

    for run in runs {
        for action in &run.actions {
            if !action.is_actionable() {
                continue;
            }
            // is_actionable guarantees the target is present
            let Some(campaign_id) = action.campaign_id else {
                continue;
            };

            let pending = PendingAction {
                action: action.clone(),
                bot_id: run.bot_id,
                run_id: run.id,
            };

            match index.get(&campaign_id) {
                Some(&i) => groups[i].actions.push(pending),
                None => {
                    index.insert(campaign_id, groups.len());
                    groups.push(CampaignActionGroup {
                        campaign_id,
                        actions: vec![pending],
                    });
                }
            }
        }
    }

    groups
}
