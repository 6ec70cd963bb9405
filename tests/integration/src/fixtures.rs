//! In-memory repositories and entity builders
//!
//! The repositories mirror the ordering and filtering semantics of the
//! PostgreSQL implementations closely enough for engine-level tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use adops_core::entities::{
    Action, ActionKind, Bot, BotRun, BotStatus, Campaign, CampaignChangeLog, CampaignStatus,
    Platform, Playbook, RunStatus,
};
use adops_core::traits::{
    BotLogic, BotLogicOutput, BotRepository, BotRunRepository, CampaignRepository,
    ChangeLogQuery, ChangeLogRepository, CreativeRepository, PlaybookRepository, RepoResult,
    RunWindow,
};
use adops_core::{DomainError, Snowflake};

// ============================================================================
// In-memory repositories
// ============================================================================

#[derive(Default)]
pub struct MemBotRepository {
    bots: Mutex<Vec<Bot>>,
}

impl MemBotRepository {
    pub fn insert(&self, bot: Bot) {
        self.bots.lock().unwrap().push(bot);
    }

    pub fn get(&self, id: Snowflake) -> Option<Bot> {
        self.bots.lock().unwrap().iter().find(|b| b.id == id).cloned()
    }
}

#[async_trait]
impl BotRepository for MemBotRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Bot>> {
        Ok(self.get(id))
    }

    async fn find_due(&self, now: DateTime<Utc>, limit: i64) -> RepoResult<Vec<Bot>> {
        let bots = self.bots.lock().unwrap();
        let mut due: Vec<Bot> = bots.iter().filter(|b| b.is_due(now)).cloned().collect();
        // NULLS FIRST, then earliest next_run_after
        due.sort_by_key(|b| b.next_run_after);
        due.truncate(limit.max(0) as usize);
        Ok(due)
    }

    async fn create(&self, bot: &Bot) -> RepoResult<()> {
        self.insert(bot.clone());
        Ok(())
    }

    async fn record_run(
        &self,
        id: Snowflake,
        last_run_at: DateTime<Utc>,
        next_run_after: DateTime<Utc>,
    ) -> RepoResult<()> {
        let mut bots = self.bots.lock().unwrap();
        let bot = bots
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(DomainError::BotNotFound(id))?;
        bot.last_run_at = Some(last_run_at);
        bot.next_run_after = Some(next_run_after);
        bot.updated_at = last_run_at;
        Ok(())
    }

    async fn set_status(&self, id: Snowflake, status: BotStatus) -> RepoResult<()> {
        let mut bots = self.bots.lock().unwrap();
        let bot = bots
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(DomainError::BotNotFound(id))?;
        bot.status = status;
        Ok(())
    }

    async fn count_active(&self) -> RepoResult<i64> {
        let bots = self.bots.lock().unwrap();
        Ok(bots.iter().filter(|b| b.status == BotStatus::Active).count() as i64)
    }
}

#[derive(Default)]
pub struct MemPlaybookRepository {
    playbooks: Mutex<Vec<Playbook>>,
}

impl MemPlaybookRepository {
    pub fn insert(&self, playbook: Playbook) {
        self.playbooks.lock().unwrap().push(playbook);
    }
}

#[async_trait]
impl PlaybookRepository for MemPlaybookRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Playbook>> {
        let playbooks = self.playbooks.lock().unwrap();
        Ok(playbooks.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, playbook: &Playbook) -> RepoResult<()> {
        self.insert(playbook.clone());
        Ok(())
    }
}

/// In-memory run store
///
/// `fail_create_for` forces `create` to fail for one bot, for testing that
/// a storage failure on one bot does not abort the batch.
#[derive(Default)]
pub struct MemBotRunRepository {
    runs: Mutex<Vec<BotRun>>,
    fail_create_for: Mutex<Option<Snowflake>>,
}

impl MemBotRunRepository {
    pub fn insert(&self, run: BotRun) {
        self.runs.lock().unwrap().push(run);
    }

    pub fn all(&self) -> Vec<BotRun> {
        self.runs.lock().unwrap().clone()
    }

    pub fn fail_create_for(&self, bot_id: Snowflake) {
        *self.fail_create_for.lock().unwrap() = Some(bot_id);
    }
}

#[async_trait]
impl BotRunRepository for MemBotRunRepository {
    async fn create(&self, run: &BotRun) -> RepoResult<()> {
        if *self.fail_create_for.lock().unwrap() == Some(run.bot_id) {
            return Err(DomainError::DatabaseError(
                "simulated write failure".to_string(),
            ));
        }
        self.insert(run.clone());
        Ok(())
    }

    async fn find_completed_in_window(
        &self,
        window: RunWindow,
        limit: i64,
    ) -> RepoResult<Vec<BotRun>> {
        let runs = self.runs.lock().unwrap();
        let mut matching: Vec<BotRun> = runs
            .iter()
            .filter(|r| {
                r.status == RunStatus::Completed
                    && r.started_at >= window.start
                    && r.started_at <= window.end
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        matching.truncate(limit.max(0) as usize);
        Ok(matching)
    }

    async fn find_recent(
        &self,
        account_id: Option<Snowflake>,
        limit: i64,
    ) -> RepoResult<Vec<BotRun>> {
        let runs = self.runs.lock().unwrap();
        let mut matching: Vec<BotRun> = runs
            .iter()
            .filter(|r| account_id.is_none_or(|id| r.account_ids.contains(&id)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        matching.truncate(limit.max(0) as usize);
        Ok(matching)
    }

    async fn latest_started_at(&self) -> RepoResult<Option<DateTime<Utc>>> {
        let runs = self.runs.lock().unwrap();
        Ok(runs.iter().map(|r| r.started_at).max())
    }
}

#[derive(Default)]
pub struct MemCampaignRepository {
    campaigns: Mutex<Vec<Campaign>>,
}

impl MemCampaignRepository {
    pub fn insert(&self, campaign: Campaign) {
        self.campaigns.lock().unwrap().push(campaign);
    }

    pub fn get(&self, id: Snowflake) -> Option<Campaign> {
        self.campaigns
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }
}

#[async_trait]
impl CampaignRepository for MemCampaignRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Campaign>> {
        Ok(self.get(id))
    }

    async fn create(&self, campaign: &Campaign) -> RepoResult<()> {
        self.insert(campaign.clone());
        Ok(())
    }

    async fn update(&self, campaign: &Campaign) -> RepoResult<()> {
        let mut campaigns = self.campaigns.lock().unwrap();
        let existing = campaigns
            .iter_mut()
            .find(|c| c.id == campaign.id)
            .ok_or(DomainError::CampaignNotFound(campaign.id))?;
        *existing = campaign.clone();
        Ok(())
    }

    async fn count_active(&self) -> RepoResult<i64> {
        let campaigns = self.campaigns.lock().unwrap();
        Ok(campaigns.iter().filter(|c| c.is_active()).count() as i64)
    }
}

#[derive(Default)]
pub struct MemChangeLogRepository {
    entries: Mutex<Vec<CampaignChangeLog>>,
}

impl MemChangeLogRepository {
    pub fn insert(&self, entry: CampaignChangeLog) {
        self.entries.lock().unwrap().push(entry);
    }

    pub fn all(&self) -> Vec<CampaignChangeLog> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChangeLogRepository for MemChangeLogRepository {
    async fn create(&self, entry: &CampaignChangeLog) -> RepoResult<()> {
        self.entries.lock().unwrap().push(entry.clone());
        Ok(())
    }

    async fn find_recent(&self, query: ChangeLogQuery) -> RepoResult<Vec<CampaignChangeLog>> {
        let entries = self.entries.lock().unwrap();
        let mut matching: Vec<CampaignChangeLog> = entries
            .iter()
            .filter(|e| {
                query.campaign_id.is_none_or(|id| e.campaign_id == id)
                    && query.account_id.is_none_or(|id| e.account_id == id)
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.changed_at.cmp(&a.changed_at));
        matching.truncate(query.limit.max(0) as usize);
        Ok(matching)
    }
}

#[derive(Default)]
pub struct MemCreativeRepository {
    active: Mutex<i64>,
}

impl MemCreativeRepository {
    pub fn set_active(&self, count: i64) {
        *self.active.lock().unwrap() = count;
    }
}

#[async_trait]
impl CreativeRepository for MemCreativeRepository {
    async fn count_active(&self) -> RepoResult<i64> {
        Ok(*self.active.lock().unwrap())
    }
}

// ============================================================================
// Scripted bot logic
// ============================================================================

/// Bot logic that returns a fixed set of actions (and optional errors)
pub struct ScriptedBotLogic {
    pub actions: Vec<Action>,
    pub errors: Vec<String>,
}

impl ScriptedBotLogic {
    pub fn returning(actions: Vec<Action>) -> Self {
        Self {
            actions,
            errors: Vec::new(),
        }
    }
}

#[async_trait]
impl BotLogic for ScriptedBotLogic {
    async fn execute(
        &self,
        _bot: &Bot,
        _playbook: Option<&Playbook>,
    ) -> Result<BotLogicOutput, DomainError> {
        Ok(BotLogicOutput {
            actions: self.actions.clone(),
            errors: self.errors.clone(),
        })
    }
}

/// Bot logic that always fails
pub struct FailingBotLogic;

#[async_trait]
impl BotLogic for FailingBotLogic {
    async fn execute(
        &self,
        _bot: &Bot,
        _playbook: Option<&Playbook>,
    ) -> Result<BotLogicOutput, DomainError> {
        Err(DomainError::BotExecutionFailed(
            "metrics source unavailable".to_string(),
        ))
    }
}

// ============================================================================
// Entity builders
// ============================================================================

/// An active bot with no schedule, due immediately
pub fn test_bot(id: i64) -> Bot {
    let now = Utc::now();
    Bot {
        id: Snowflake::new(id),
        name: format!("bot-{id}"),
        division: "growth".to_string(),
        role: "budget".to_string(),
        platform: Platform::Meta,
        status: BotStatus::Active,
        assigned_account_ids: vec![Snowflake::new(10)],
        playbook_id: None,
        last_run_at: None,
        next_run_after: None,
        created_at: now,
        updated_at: now,
    }
}

/// An active campaign with both consent flags granted
pub fn test_campaign(id: i64) -> Campaign {
    let now = Utc::now();
    Campaign {
        id: Snowflake::new(id),
        account_id: Snowflake::new(10),
        platform: Platform::Meta,
        name: format!("campaign-{id}"),
        status: CampaignStatus::Active,
        budget_total: 500.0,
        budget_daily_cap: 50.0,
        current_daily_budget: 100.0,
        allow_auto_budget_adjustments: true,
        allow_auto_pause: true,
        start_date: None,
        end_date: None,
        created_at: now,
        updated_at: now,
    }
}

/// A completed run holding the given actions, started just now
pub fn completed_run(id: i64, bot_id: i64, actions: Vec<Action>) -> BotRun {
    let now = Utc::now();
    BotRun {
        id: Snowflake::new(id),
        bot_id: Snowflake::new(bot_id),
        playbook_id: None,
        account_ids: vec![Snowflake::new(10)],
        platform: Platform::Meta,
        started_at: now,
        finished_at: now,
        actions,
        status: RunStatus::Completed,
        errors: Vec::new(),
    }
}

/// A budget scale-up recommendation targeting a campaign
pub fn scale_up(campaign_id: i64, percent: i32) -> Action {
    Action {
        kind: ActionKind::ScaleUp,
        campaign_id: Some(Snowflake::new(campaign_id)),
        creative_id: None,
        reason: "ROAS above target".to_string(),
        percent: Some(percent),
    }
}

/// A budget cut recommendation targeting a campaign
pub fn budget_cut(campaign_id: i64, percent: i32) -> Action {
    Action {
        kind: ActionKind::BudgetCut,
        campaign_id: Some(Snowflake::new(campaign_id)),
        creative_id: None,
        reason: "CPA above threshold".to_string(),
        percent: Some(percent),
    }
}

/// A pause recommendation targeting a campaign
pub fn pause_action(campaign_id: i64) -> Action {
    Action {
        kind: ActionKind::Pause,
        campaign_id: Some(Snowflake::new(campaign_id)),
        creative_id: None,
        reason: "spend with no conversions".to_string(),
        percent: None,
    }
}
