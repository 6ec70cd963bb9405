//! Database models with SQLx `FromRow` derives

mod bot;
mod bot_run;
mod campaign;
mod change_log;
mod playbook;

pub use bot::BotModel;
pub use bot_run::BotRunModel;
pub use campaign::CampaignModel;
pub use change_log::ChangeLogModel;
pub use playbook::PlaybookModel;
