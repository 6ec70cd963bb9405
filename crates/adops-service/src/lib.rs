//! # adops-service
//!
//! Application layer containing the bot scheduler, the action-execution
//! engine, and the DTOs exchanged with the API layer.

pub mod dto;
pub mod services;

pub use services::{
    ActionAggregator, BotLogic, ChangeLogService, ExecutionService, NoopBotLogic,
    SchedulerService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
