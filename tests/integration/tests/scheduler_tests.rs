//! End-to-end tests for the bot scheduler and audit queries

use std::sync::Arc;

use adops_core::entities::{BotStatus, RunStatus};
use adops_core::Snowflake;
use adops_service::{ChangeLogService, SchedulerService};
use chrono::{Duration, Utc};
use integration_tests::{
    completed_run, scale_up, test_bot, test_campaign, FailingBotLogic, ScriptedBotLogic,
    TestHarness,
};

#[tokio::test]
async fn due_bot_runs_and_is_rescheduled() {
    let h = TestHarness::with_logic(Arc::new(ScriptedBotLogic::returning(vec![
        scale_up(1, 20),
        scale_up(2, 10),
    ])));
    h.bots.insert(test_bot(1));

    let outcome = SchedulerService::new(&h.ctx)
        .run_due_bots(None)
        .await
        .unwrap();

    assert_eq!(outcome.bots_run, 1);
    assert_eq!(outcome.actions_produced, 2);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.bot_ids, vec![Snowflake::new(1)]);

    let runs = h.runs.all();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].status, RunStatus::Completed);
    assert_eq!(runs[0].bot_id, Snowflake::new(1));
    assert_eq!(runs[0].actions.len(), 2);

    let bot = h.bots.get(Snowflake::new(1)).unwrap();
    let last_run = bot.last_run_at.expect("last_run_at recorded");
    assert_eq!(bot.next_run_after, Some(last_run + Duration::hours(1)));
}

#[tokio::test]
async fn inactive_bots_are_never_run() {
    let h = TestHarness::new();
    let mut paused = test_bot(1);
    paused.status = BotStatus::Paused;
    let mut retired = test_bot(2);
    retired.status = BotStatus::Retired;
    h.bots.insert(paused);
    h.bots.insert(retired);

    let outcome = SchedulerService::new(&h.ctx)
        .run_due_bots(None)
        .await
        .unwrap();

    assert_eq!(outcome.bots_run, 0);
    assert!(h.runs.all().is_empty());
}

#[tokio::test]
async fn bot_scheduled_in_future_is_not_due() {
    let h = TestHarness::new();
    let mut bot = test_bot(1);
    bot.next_run_after = Some(Utc::now() + Duration::hours(2));
    h.bots.insert(bot);

    let outcome = SchedulerService::new(&h.ctx)
        .run_due_bots(None)
        .await
        .unwrap();

    assert_eq!(outcome.bots_run, 0);
}

#[tokio::test]
async fn max_bots_is_clamped_to_at_least_one() {
    let h = TestHarness::new();
    h.bots.insert(test_bot(1));
    h.bots.insert(test_bot(2));
    h.bots.insert(test_bot(3));

    let outcome = SchedulerService::new(&h.ctx)
        .run_due_bots(Some(0))
        .await
        .unwrap();
    assert_eq!(outcome.bots_run, 1);

    let outcome = SchedulerService::new(&h.ctx)
        .run_due_bots(Some(-10))
        .await
        .unwrap();
    assert_eq!(outcome.bots_run, 1);
}

#[tokio::test]
async fn failing_logic_records_failed_run() {
    let h = TestHarness::with_logic(Arc::new(FailingBotLogic));
    h.bots.insert(test_bot(1));

    let outcome = SchedulerService::new(&h.ctx)
        .run_due_bots(None)
        .await
        .unwrap();

    // The failure is captured in the run record, not the batch outcome
    assert_eq!(outcome.bots_run, 1);
    assert!(outcome.errors.is_empty());

    let runs = h.runs.all();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].status, RunStatus::Failed);
    assert!(runs[0].actions.is_empty());
    assert!(!runs[0].errors.is_empty());

    // A failed bot is still rescheduled
    let bot = h.bots.get(Snowflake::new(1)).unwrap();
    assert!(bot.next_run_after.is_some());
}

#[tokio::test]
async fn partial_run_when_logic_reports_errors() {
    let h = TestHarness::with_logic(Arc::new(ScriptedBotLogic {
        actions: vec![scale_up(1, 20)],
        errors: vec!["one campaign metrics missing".to_string()],
    }));
    h.bots.insert(test_bot(1));

    SchedulerService::new(&h.ctx).run_due_bots(None).await.unwrap();

    let runs = h.runs.all();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].status, RunStatus::Partial);
    assert_eq!(runs[0].actions.len(), 1);
    assert_eq!(runs[0].errors.len(), 1);
}

#[tokio::test]
async fn store_failure_on_one_bot_does_not_abort_batch() {
    let h = TestHarness::new();
    h.bots.insert(test_bot(1));
    h.bots.insert(test_bot(2));
    h.runs.fail_create_for(Snowflake::new(1));

    let outcome = SchedulerService::new(&h.ctx)
        .run_due_bots(None)
        .await
        .unwrap();

    assert_eq!(outcome.bots_run, 1);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("bot 1"));
    assert_eq!(outcome.bot_ids, vec![Snowflake::new(2)]);
}

#[tokio::test]
async fn summary_reports_counts_and_last_run() {
    let h = TestHarness::new();
    h.bots.insert(test_bot(1));
    let mut paused = test_bot(2);
    paused.status = BotStatus::Paused;
    h.bots.insert(paused);
    h.campaigns.insert(test_campaign(1));
    h.campaigns.insert(test_campaign(2));
    h.creatives.set_active(7);

    let run = completed_run(100, 1, vec![]);
    let started_at = run.started_at;
    h.runs.insert(run);

    let summary = SchedulerService::new(&h.ctx).summary().await.unwrap();

    assert_eq!(summary.active_bots, 1);
    assert_eq!(summary.active_campaigns, 2);
    assert_eq!(summary.active_creatives, 7);
    assert_eq!(summary.last_run_at, Some(started_at));
}

#[tokio::test]
async fn recent_runs_filters_by_account_and_limits() {
    let h = TestHarness::new();
    let now = Utc::now();
    for i in 0..3 {
        let mut run = completed_run(100 + i, 1, vec![]);
        run.started_at = now - Duration::minutes(i);
        h.runs.insert(run);
    }
    let mut other_account = completed_run(200, 2, vec![]);
    other_account.account_ids = vec![Snowflake::new(99)];
    h.runs.insert(other_account);

    let service = SchedulerService::new(&h.ctx);

    let runs = service
        .recent_runs(Some(Snowflake::new(10)), None)
        .await
        .unwrap();
    assert_eq!(runs.len(), 3);
    // Newest first
    assert_eq!(runs[0].id, Snowflake::new(100));

    let runs = service
        .recent_runs(Some(Snowflake::new(10)), Some(2))
        .await
        .unwrap();
    assert_eq!(runs.len(), 2);

    let runs = service.recent_runs(None, None).await.unwrap();
    assert_eq!(runs.len(), 4);
}

#[tokio::test]
async fn recent_changes_filters_by_campaign_and_account() {
    let h = TestHarness::new();
    let now = Utc::now();

    let entry = |id: i64, campaign: i64, account: i64, minutes_ago: i64| {
        adops_core::entities::CampaignChangeLog {
            id: Snowflake::new(id),
            campaign_id: Snowflake::new(campaign),
            account_id: Snowflake::new(account),
            old_daily_budget: 100.0,
            new_daily_budget: 120.0,
            old_status: adops_core::entities::CampaignStatus::Active,
            new_status: adops_core::entities::CampaignStatus::Active,
            source: adops_core::entities::ChangeSource::Bot,
            bot_id: None,
            run_id: None,
            reasons: vec!["ROAS above target".to_string()],
            changed_at: now - Duration::minutes(minutes_ago),
        }
    };

    h.change_logs.insert(entry(1, 1, 10, 0));
    h.change_logs.insert(entry(2, 1, 10, 5));
    h.change_logs.insert(entry(3, 2, 99, 1));

    let service = ChangeLogService::new(&h.ctx);

    let changes = service
        .recent_changes(Some(Snowflake::new(1)), None, None)
        .await
        .unwrap();
    assert_eq!(changes.len(), 2);
    // Newest first
    assert_eq!(changes[0].id, Snowflake::new(1));

    let changes = service
        .recent_changes(None, Some(Snowflake::new(99)), None)
        .await
        .unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].id, Snowflake::new(3));

    let changes = service
        .recent_changes(None, None, Some(1))
        .await
        .unwrap();
    assert_eq!(changes.len(), 1);
}
