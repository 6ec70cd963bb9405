//! Campaign change log entity <-> model mapper

use adops_core::entities::{CampaignChangeLog, CampaignStatus, ChangeSource};
use adops_core::error::DomainError;
use adops_core::value_objects::Snowflake;

use crate::models::ChangeLogModel;

use super::parse_stored;

/// Convert ChangeLogModel to CampaignChangeLog entity
impl TryFrom<ChangeLogModel> for CampaignChangeLog {
    type Error = DomainError;

    fn try_from(model: ChangeLogModel) -> Result<Self, Self::Error> {
        Ok(CampaignChangeLog {
            id: Snowflake::new(model.id),
            campaign_id: Snowflake::new(model.campaign_id),
            account_id: Snowflake::new(model.account_id),
            old_daily_budget: model.old_daily_budget,
            new_daily_budget: model.new_daily_budget,
            old_status: parse_stored(
                "campaign_change_logs.old_status",
                &model.old_status,
                CampaignStatus::parse,
            )?,
            new_status: parse_stored(
                "campaign_change_logs.new_status",
                &model.new_status,
                CampaignStatus::parse,
            )?,
            source: parse_stored(
                "campaign_change_logs.source",
                &model.source,
                ChangeSource::parse,
            )?,
            bot_id: model.bot_id.map(Snowflake::new),
            run_id: model.run_id.map(Snowflake::new),
            reasons: model.reasons,
            changed_at: model.changed_at,
        })
    }
}

/// Convert CampaignChangeLog entity reference to values for database insertion
pub struct ChangeLogInsert<'a> {
    pub id: i64,
    pub campaign_id: i64,
    pub account_id: i64,
    pub old_daily_budget: f64,
    pub new_daily_budget: f64,
    pub old_status: &'static str,
    pub new_status: &'static str,
    pub source: &'static str,
    pub bot_id: Option<i64>,
    pub run_id: Option<i64>,
    pub reasons: &'a [String],
}

impl<'a> ChangeLogInsert<'a> {
    pub fn new(log: &'a CampaignChangeLog) -> Self {
        Self {
            id: log.id.into_inner(),
            campaign_id: log.campaign_id.into_inner(),
            account_id: log.account_id.into_inner(),
            old_daily_budget: log.old_daily_budget,
            new_daily_budget: log.new_daily_budget,
            old_status: log.old_status.as_str(),
            new_status: log.new_status.as_str(),
            source: log.source.as_str(),
            bot_id: log.bot_id.map(Snowflake::into_inner),
            run_id: log.run_id.map(Snowflake::into_inner),
            reasons: &log.reasons,
        }
    }
}
