//! Bot run entity <-> model mapper

use adops_core::entities::{Action, BotRun, Platform, RunStatus};
use adops_core::error::DomainError;
use adops_core::value_objects::Snowflake;

use crate::models::BotRunModel;

use super::parse_stored;

/// Convert BotRunModel to BotRun entity
impl TryFrom<BotRunModel> for BotRun {
    type Error = DomainError;

    fn try_from(model: BotRunModel) -> Result<Self, Self::Error> {
        let actions: Vec<Action> =
            serde_json::from_value(model.actions).map_err(|e| DomainError::InvalidStoredValue {
                field: "bot_runs.actions",
                value: e.to_string(),
            })?;

        Ok(BotRun {
            id: Snowflake::new(model.id),
            bot_id: Snowflake::new(model.bot_id),
            playbook_id: model.playbook_id.map(Snowflake::new),
            account_ids: model.account_ids.into_iter().map(Snowflake::new).collect(),
            platform: parse_stored("bot_runs.platform", &model.platform, Platform::parse)?,
            started_at: model.started_at,
            finished_at: model.finished_at,
            actions,
            status: parse_stored("bot_runs.status", &model.status, RunStatus::parse)?,
            errors: model.errors,
        })
    }
}

/// Convert BotRun entity reference to values for database insertion
pub struct BotRunInsert<'a> {
    pub id: i64,
    pub bot_id: i64,
    pub playbook_id: Option<i64>,
    pub account_ids: Vec<i64>,
    pub platform: &'static str,
    pub actions: serde_json::Value,
    pub status: &'static str,
    pub errors: &'a [String],
}

impl<'a> BotRunInsert<'a> {
    /// # Errors
    /// Returns an error if the action list cannot be serialized.
    pub fn new(run: &'a BotRun) -> Result<Self, DomainError> {
        let actions = serde_json::to_value(&run.actions)
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(Self {
            id: run.id.into_inner(),
            bot_id: run.bot_id.into_inner(),
            playbook_id: run.playbook_id.map(Snowflake::into_inner),
            account_ids: run.account_ids.iter().map(|id| id.into_inner()).collect(),
            platform: run.platform.as_str(),
            actions,
            status: run.status.as_str(),
            errors: &run.errors,
        })
    }
}
