//! Ports - repository and bot-logic traits the infrastructure layer implements

mod bot_logic;
mod repositories;

pub use bot_logic::{BotLogic, BotLogicOutput};
pub use repositories::{
    BotRepository, BotRunRepository, CampaignRepository, ChangeLogQuery, ChangeLogRepository,
    CreativeRepository, PlaybookRepository, RepoResult, RunWindow,
};
