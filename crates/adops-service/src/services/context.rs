//! Service context - dependency container for services
//!
//! Holds all repositories, the bot logic implementation, and scheduling
//! parameters needed by services.

use std::sync::Arc;

use adops_common::{ExecutionConfig, SchedulerConfig};
use adops_core::traits::{
    BotLogic, BotRepository, BotRunRepository, CampaignRepository, ChangeLogRepository,
    CreativeRepository, PlaybookRepository,
};
use adops_core::SnowflakeGenerator;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The bot logic implementation
/// - Snowflake generator for ID generation
/// - Scheduler and execution parameters
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    bot_repo: Arc<dyn BotRepository>,
    playbook_repo: Arc<dyn PlaybookRepository>,
    run_repo: Arc<dyn BotRunRepository>,
    campaign_repo: Arc<dyn CampaignRepository>,
    change_log_repo: Arc<dyn ChangeLogRepository>,
    creative_repo: Arc<dyn CreativeRepository>,

    // Bot decision logic
    bot_logic: Arc<dyn BotLogic>,

    // Services
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Parameters
    scheduler_config: SchedulerConfig,
    execution_config: ExecutionConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        bot_repo: Arc<dyn BotRepository>,
        playbook_repo: Arc<dyn PlaybookRepository>,
        run_repo: Arc<dyn BotRunRepository>,
        campaign_repo: Arc<dyn CampaignRepository>,
        change_log_repo: Arc<dyn ChangeLogRepository>,
        creative_repo: Arc<dyn CreativeRepository>,
        bot_logic: Arc<dyn BotLogic>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        scheduler_config: SchedulerConfig,
        execution_config: ExecutionConfig,
    ) -> Self {
        Self {
            bot_repo,
            playbook_repo,
            run_repo,
            campaign_repo,
            change_log_repo,
            creative_repo,
            bot_logic,
            snowflake_generator,
            scheduler_config,
            execution_config,
        }
    }

    // === Repositories ===

    /// Get the bot repository
    pub fn bot_repo(&self) -> &dyn BotRepository {
        self.bot_repo.as_ref()
    }

    /// Get the playbook repository
    pub fn playbook_repo(&self) -> &dyn PlaybookRepository {
        self.playbook_repo.as_ref()
    }

    /// Get the bot run repository
    pub fn run_repo(&self) -> &dyn BotRunRepository {
        self.run_repo.as_ref()
    }

    /// Get the campaign repository
    pub fn campaign_repo(&self) -> &dyn CampaignRepository {
        self.campaign_repo.as_ref()
    }

    /// Get the change log repository
    pub fn change_log_repo(&self) -> &dyn ChangeLogRepository {
        self.change_log_repo.as_ref()
    }

    /// Get the creative repository
    pub fn creative_repo(&self) -> &dyn CreativeRepository {
        self.creative_repo.as_ref()
    }

    // === Bot Logic ===

    /// Get the bot decision logic
    pub fn bot_logic(&self) -> &dyn BotLogic {
        self.bot_logic.as_ref()
    }

    // === Services ===

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> adops_core::Snowflake {
        self.snowflake_generator.generate()
    }

    // === Parameters ===

    /// Get the scheduler parameters
    pub fn scheduler_config(&self) -> &SchedulerConfig {
        &self.scheduler_config
    }

    /// Get the execution parameters
    pub fn execution_config(&self) -> &ExecutionConfig {
        &self.execution_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("bot_logic", &"...")
            .field("scheduler_config", &self.scheduler_config)
            .field("execution_config", &self.execution_config)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    bot_repo: Option<Arc<dyn BotRepository>>,
    playbook_repo: Option<Arc<dyn PlaybookRepository>>,
    run_repo: Option<Arc<dyn BotRunRepository>>,
    campaign_repo: Option<Arc<dyn CampaignRepository>>,
    change_log_repo: Option<Arc<dyn ChangeLogRepository>>,
    creative_repo: Option<Arc<dyn CreativeRepository>>,
    bot_logic: Option<Arc<dyn BotLogic>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    scheduler_config: SchedulerConfig,
    execution_config: ExecutionConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            bot_repo: None,
            playbook_repo: None,
            run_repo: None,
            campaign_repo: None,
            change_log_repo: None,
            creative_repo: None,
            bot_logic: None,
            snowflake_generator: None,
            scheduler_config: SchedulerConfig::default(),
            execution_config: ExecutionConfig::default(),
        }
    }

    pub fn bot_repo(mut self, repo: Arc<dyn BotRepository>) -> Self {
        self.bot_repo = Some(repo);
        self
    }

    pub fn playbook_repo(mut self, repo: Arc<dyn PlaybookRepository>) -> Self {
        self.playbook_repo = Some(repo);
        self
    }

    pub fn run_repo(mut self, repo: Arc<dyn BotRunRepository>) -> Self {
        self.run_repo = Some(repo);
        self
    }

    pub fn campaign_repo(mut self, repo: Arc<dyn CampaignRepository>) -> Self {
        self.campaign_repo = Some(repo);
        self
    }

    pub fn change_log_repo(mut self, repo: Arc<dyn ChangeLogRepository>) -> Self {
        self.change_log_repo = Some(repo);
        self
    }

    pub fn creative_repo(mut self, repo: Arc<dyn CreativeRepository>) -> Self {
        self.creative_repo = Some(repo);
        self
    }

    pub fn bot_logic(mut self, logic: Arc<dyn BotLogic>) -> Self {
        self.bot_logic = Some(logic);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn scheduler_config(mut self, config: SchedulerConfig) -> Self {
        self.scheduler_config = config;
        self
    }

    pub fn execution_config(mut self, config: ExecutionConfig) -> Self {
        self.execution_config = config;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.bot_repo
                .ok_or_else(|| ServiceError::validation("bot_repo is required"))?,
            self.playbook_repo
                .ok_or_else(|| ServiceError::validation("playbook_repo is required"))?,
            self.run_repo
                .ok_or_else(|| ServiceError::validation("run_repo is required"))?,
            self.campaign_repo
                .ok_or_else(|| ServiceError::validation("campaign_repo is required"))?,
            self.change_log_repo
                .ok_or_else(|| ServiceError::validation("change_log_repo is required"))?,
            self.creative_repo
                .ok_or_else(|| ServiceError::validation("creative_repo is required"))?,
            self.bot_logic
                .ok_or_else(|| ServiceError::validation("bot_logic is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.scheduler_config,
            self.execution_config,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
