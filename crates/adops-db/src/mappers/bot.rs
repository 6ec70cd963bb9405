//! Bot entity <-> model mapper

use adops_core::entities::{Bot, BotStatus, Platform};
use adops_core::error::DomainError;
use adops_core::value_objects::Snowflake;

use crate::models::BotModel;

use super::parse_stored;

/// Convert BotModel to Bot entity
impl TryFrom<BotModel> for Bot {
    type Error = DomainError;

    fn try_from(model: BotModel) -> Result<Self, Self::Error> {
        Ok(Bot {
            id: Snowflake::new(model.id),
            name: model.name,
            division: model.division,
            role: model.role,
            platform: parse_stored("bots.platform", &model.platform, Platform::parse)?,
            status: parse_stored("bots.status", &model.status, BotStatus::parse)?,
            assigned_account_ids: model
                .assigned_account_ids
                .into_iter()
                .map(Snowflake::new)
                .collect(),
            playbook_id: model.playbook_id.map(Snowflake::new),
            last_run_at: model.last_run_at,
            next_run_after: model.next_run_after,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert Bot entity reference to values for database insertion
pub struct BotInsert<'a> {
    pub id: i64,
    pub name: &'a str,
    pub division: &'a str,
    pub role: &'a str,
    pub platform: &'static str,
    pub status: &'static str,
    pub assigned_account_ids: Vec<i64>,
    pub playbook_id: Option<i64>,
}

impl<'a> BotInsert<'a> {
    pub fn new(bot: &'a Bot) -> Self {
        Self {
            id: bot.id.into_inner(),
            name: &bot.name,
            division: &bot.division,
            role: &bot.role,
            platform: bot.platform.as_str(),
            status: bot.status.as_str(),
            assigned_account_ids: bot
                .assigned_account_ids
                .iter()
                .map(|id| id.into_inner())
                .collect(),
            playbook_id: bot.playbook_id.map(Snowflake::into_inner),
        }
    }
}
