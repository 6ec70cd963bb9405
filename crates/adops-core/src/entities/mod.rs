//! Domain entities - core business objects

mod bot;
mod bot_run;
mod campaign;
mod change_log;
mod playbook;

pub use bot::{Bot, BotStatus, Platform};
pub use bot_run::{Action, ActionKind, BotRun, RunStatus};
pub use campaign::{Campaign, CampaignStatus};
pub use change_log::{CampaignChangeLog, ChangeSource};
pub use playbook::Playbook;
