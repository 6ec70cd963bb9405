//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! orchestration, action execution, and auditing of domain operations.

pub mod aggregator;
pub mod audit;
pub mod bot_logic;
pub mod context;
pub mod error;
pub mod executor;
pub mod scheduler;

// Re-export all services for convenience
pub use aggregator::{ActionAggregator, CampaignActionGroup, PendingAction};
pub use audit::ChangeLogService;
pub use bot_logic::NoopBotLogic;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use executor::{ApplyActionsOutcome, ExecutionService, SkippedAction};
pub use scheduler::{OrchestrationSummary, RunDueBotsOutcome, SchedulerService};

pub use adops_core::traits::BotLogic;
