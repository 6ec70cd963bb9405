//! # adops-core
//!
//! Domain layer containing entities, value objects, budget policy, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod budget;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Action, ActionKind, Bot, BotRun, BotStatus, Campaign, CampaignChangeLog, CampaignStatus,
    ChangeSource, Platform, Playbook, RunStatus,
};
pub use error::DomainError;
pub use traits::{
    BotLogic, BotLogicOutput, BotRepository, BotRunRepository, CampaignRepository,
    ChangeLogQuery, ChangeLogRepository, CreativeRepository, PlaybookRepository, RepoResult,
    RunWindow,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
