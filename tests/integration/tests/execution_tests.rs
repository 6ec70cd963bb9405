//! End-to-end tests for the action-execution engine
//!
//! Each test seeds completed runs and campaigns into in-memory stores,
//! invokes one execution pass, and asserts on the persisted state.

use adops_core::entities::{Action, ActionKind, CampaignStatus, ChangeSource, RunStatus};
use adops_core::Snowflake;
use adops_service::ExecutionService;
use chrono::{Duration, Utc};
use integration_tests::{
    budget_cut, completed_run, pause_action, scale_up, test_campaign, TestHarness,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[tokio::test]
async fn scale_up_increases_budget_and_writes_one_change_log() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    h.runs.insert(completed_run(100, 5, vec![scale_up(1, 20)]));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.actions_processed, 1);
    assert_eq!(outcome.campaigns_updated, 1);
    assert_eq!(outcome.budget_increases, 1);
    assert_eq!(outcome.budget_cuts, 0);
    assert_eq!(outcome.pauses_applied, 0);
    assert!(outcome.skipped.is_empty());
    assert!(!outcome.dry_run);

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 120.0);

    let logs = h.change_logs.all();
    assert_eq!(logs.len(), 1);
    let log = &logs[0];
    assert_close(log.old_daily_budget, 100.0);
    assert_close(log.new_daily_budget, 120.0);
    assert_eq!(log.source, ChangeSource::Bot);
    assert_eq!(log.bot_id, Some(Snowflake::new(5)));
    assert_eq!(log.run_id, Some(Snowflake::new(100)));
    assert_eq!(log.reasons, vec!["ROAS above target".to_string()]);
}

#[tokio::test]
async fn sequential_actions_apply_in_order() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    // 100 -> +20% -> 120 -> -20% -> 96
    h.runs.insert(completed_run(
        100,
        5,
        vec![scale_up(1, 20), budget_cut(1, 20)],
    ));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.actions_processed, 2);
    assert_eq!(outcome.campaigns_updated, 1);
    assert_eq!(outcome.budget_increases, 1);
    assert_eq!(outcome.budget_cuts, 1);

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 96.0);

    let logs = h.change_logs.all();
    assert_eq!(logs.len(), 1);
    assert_close(logs[0].old_daily_budget, 100.0);
    assert_close(logs[0].new_daily_budget, 96.0);
    assert_eq!(logs[0].reasons.len(), 2);
}

#[tokio::test]
async fn scale_up_clamps_to_total_budget() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.budget_total = 50.0;
    campaign.current_daily_budget = 10.0;
    h.campaigns.insert(campaign);
    h.runs.insert(completed_run(100, 5, vec![scale_up(1, 1000)]));

    ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 50.0);
}

#[tokio::test]
async fn budget_cut_clamps_to_floor() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.current_daily_budget = 10.0;
    h.campaigns.insert(campaign);
    h.runs.insert(completed_run(100, 5, vec![budget_cut(1, 90)]));

    ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 5.0);
}

#[tokio::test]
async fn no_ceiling_when_total_budget_is_zero() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.budget_total = 0.0;
    h.campaigns.insert(campaign);
    h.runs.insert(completed_run(100, 5, vec![scale_up(1, 1000)]));

    ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 1100.0);
}

#[tokio::test]
async fn working_budget_falls_back_to_daily_cap() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.current_daily_budget = 0.0;
    campaign.budget_daily_cap = 50.0;
    h.campaigns.insert(campaign);
    h.runs.insert(completed_run(100, 5, vec![scale_up(1, 20)]));

    ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 60.0);
}

#[tokio::test]
async fn default_percent_applies_when_action_has_none() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    let mut action = scale_up(1, 0);
    action.percent = None;
    h.runs.insert(completed_run(100, 5, vec![action]));

    ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 120.0);
}

#[tokio::test]
async fn budget_consent_blocks_budget_changes() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.allow_auto_budget_adjustments = false;
    h.campaigns.insert(campaign);
    h.runs.insert(completed_run(100, 5, vec![scale_up(1, 20)]));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.actions_processed, 1);
    assert_eq!(outcome.campaigns_updated, 0);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, "auto budget adjustments not allowed");
    assert_eq!(outcome.skipped[0].kind, ActionKind::ScaleUp);

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 100.0);
    assert!(h.change_logs.all().is_empty());
}

#[tokio::test]
async fn pause_consent_blocks_pause() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.allow_auto_pause = false;
    h.campaigns.insert(campaign);
    h.runs.insert(completed_run(100, 5, vec![pause_action(1)]));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.pauses_applied, 0);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, "auto pause not allowed");

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_eq!(campaign.status, CampaignStatus::Active);
    assert!(h.change_logs.all().is_empty());
}

#[tokio::test]
async fn pause_skipped_when_campaign_not_active() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.status = CampaignStatus::Paused;
    h.campaigns.insert(campaign);
    h.runs.insert(completed_run(100, 5, vec![pause_action(1)]));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.pauses_applied, 0);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, "campaign not active");
    assert!(h.change_logs.all().is_empty());
}

#[tokio::test]
async fn pause_applies_and_audits_status_transition() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    h.runs.insert(completed_run(100, 5, vec![pause_action(1)]));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.pauses_applied, 1);
    assert_eq!(outcome.campaigns_updated, 1);

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_eq!(campaign.status, CampaignStatus::Paused);
    // Budget untouched by a pause
    assert_close(campaign.current_daily_budget, 100.0);

    let logs = h.change_logs.all();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].old_status, CampaignStatus::Active);
    assert_eq!(logs[0].new_status, CampaignStatus::Paused);
    assert_close(logs[0].old_daily_budget, 100.0);
    assert_close(logs[0].new_daily_budget, 100.0);
}

#[tokio::test]
async fn dry_run_computes_counters_but_persists_nothing() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    h.runs.insert(completed_run(
        100,
        5,
        vec![scale_up(1, 20), pause_action(1)],
    ));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, true)
        .await
        .unwrap();

    assert!(outcome.dry_run);
    assert_eq!(outcome.actions_processed, 2);
    assert_eq!(outcome.campaigns_updated, 1);
    assert_eq!(outcome.budget_increases, 1);
    assert_eq!(outcome.pauses_applied, 1);

    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 100.0);
    assert_eq!(campaign.status, CampaignStatus::Active);
    assert!(h.change_logs.all().is_empty());
}

#[tokio::test]
async fn missing_campaign_skips_whole_group() {
    let h = TestHarness::new();
    h.runs.insert(completed_run(
        100,
        5,
        vec![scale_up(999, 20), pause_action(999)],
    ));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    // Skipped actions against a missing campaign are not counted as processed
    assert_eq!(outcome.actions_processed, 0);
    assert_eq!(outcome.campaigns_updated, 0);
    assert_eq!(outcome.skipped.len(), 2);
    assert!(outcome
        .skipped
        .iter()
        .all(|s| s.reason == "campaign not found"));
}

#[tokio::test]
async fn empty_window_returns_empty_outcome() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(Some(12), false)
        .await
        .unwrap();

    assert_eq!(outcome.actions_processed, 0);
    assert_eq!(outcome.campaigns_updated, 0);
    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.window_end - outcome.window_start, Duration::hours(12));
}

#[tokio::test]
async fn failed_runs_are_not_aggregated() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    let mut run = completed_run(100, 5, vec![scale_up(1, 20)]);
    run.status = RunStatus::Failed;
    h.runs.insert(run);

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.actions_processed, 0);
    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 100.0);
}

#[tokio::test]
async fn informational_and_untargeted_actions_are_ignored() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));

    let untargeted = Action {
        kind: ActionKind::ScaleUp,
        campaign_id: None,
        creative_id: None,
        reason: "ROAS above target".to_string(),
        percent: Some(20),
    };
    let informational = Action {
        kind: ActionKind::NewCreative,
        campaign_id: Some(Snowflake::new(1)),
        creative_id: None,
        reason: "creative fatigue".to_string(),
        percent: None,
    };
    h.runs
        .insert(completed_run(100, 5, vec![untargeted, informational]));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.actions_processed, 0);
    assert!(outcome.skipped.is_empty());
    let campaign = h.campaigns.get(Snowflake::new(1)).unwrap();
    assert_close(campaign.current_daily_budget, 100.0);
}

#[tokio::test]
async fn trigger_comes_from_first_applied_action() {
    let h = TestHarness::new();
    let mut campaign = test_campaign(1);
    campaign.allow_auto_pause = false;
    h.campaigns.insert(campaign);

    // Newest run recommends a pause (blocked by consent); the older run's
    // scale-up is the first action actually applied.
    let now = Utc::now();
    let mut newest = completed_run(200, 6, vec![pause_action(1)]);
    newest.started_at = now;
    let mut older = completed_run(100, 5, vec![scale_up(1, 20)]);
    older.started_at = now - Duration::minutes(5);
    h.runs.insert(newest);
    h.runs.insert(older);

    ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    let logs = h.change_logs.all();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].bot_id, Some(Snowflake::new(5)));
    assert_eq!(logs[0].run_id, Some(Snowflake::new(100)));
}

#[tokio::test]
async fn runs_outside_window_are_excluded() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    let mut run = completed_run(100, 5, vec![scale_up(1, 20)]);
    run.started_at = Utc::now() - Duration::hours(48);
    h.runs.insert(run);

    // Default 24h window misses the run
    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();
    assert_eq!(outcome.actions_processed, 0);

    // A wider window picks it up
    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(Some(72), false)
        .await
        .unwrap();
    assert_eq!(outcome.actions_processed, 1);
    assert_eq!(outcome.campaigns_updated, 1);
}

#[tokio::test]
async fn non_positive_hours_back_falls_back_to_default() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    h.runs.insert(completed_run(100, 5, vec![scale_up(1, 20)]));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(Some(-3), false)
        .await
        .unwrap();

    // Default window is 24 hours
    assert_eq!(outcome.window_end - outcome.window_start, Duration::hours(24));
    assert_eq!(outcome.actions_processed, 1);
}

#[tokio::test]
async fn independent_campaigns_each_get_one_change_log() {
    let h = TestHarness::new();
    h.campaigns.insert(test_campaign(1));
    h.campaigns.insert(test_campaign(2));
    h.runs.insert(completed_run(
        100,
        5,
        vec![scale_up(1, 20), budget_cut(2, 10)],
    ));

    let outcome = ExecutionService::new(&h.ctx)
        .apply_recent_actions(None, false)
        .await
        .unwrap();

    assert_eq!(outcome.campaigns_updated, 2);
    assert_eq!(h.change_logs.all().len(), 2);
    assert_close(
        h.campaigns.get(Snowflake::new(1)).unwrap().current_daily_budget,
        120.0,
    );
    assert_close(
        h.campaigns.get(Snowflake::new(2)).unwrap().current_daily_budget,
        90.0,
    );
}
