//! PostgreSQL repository implementations

mod bot;
mod bot_run;
mod campaign;
mod change_log;
mod creative;
mod error;
mod playbook;

pub use bot::PgBotRepository;
pub use bot_run::PgBotRunRepository;
pub use campaign::PgCampaignRepository;
pub use change_log::PgChangeLogRepository;
pub use creative::PgCreativeRepository;
pub use playbook::PgPlaybookRepository;
