//! Campaign entity <-> model mapper

use adops_core::entities::{Campaign, CampaignStatus, Platform};
use adops_core::error::DomainError;
use adops_core::value_objects::Snowflake;

use crate::models::CampaignModel;

use super::parse_stored;

/// Convert CampaignModel to Campaign entity
impl TryFrom<CampaignModel> for Campaign {
    type Error = DomainError;

    fn try_from(model: CampaignModel) -> Result<Self, Self::Error> {
        Ok(Campaign {
            id: Snowflake::new(model.id),
            account_id: Snowflake::new(model.account_id),
            platform: parse_stored("campaigns.platform", &model.platform, Platform::parse)?,
            name: model.name,
            status: parse_stored("campaigns.status", &model.status, CampaignStatus::parse)?,
            budget_total: model.budget_total,
            budget_daily_cap: model.budget_daily_cap,
            current_daily_budget: model.current_daily_budget,
            allow_auto_budget_adjustments: model.allow_auto_budget_adjustments,
            allow_auto_pause: model.allow_auto_pause,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert Campaign entity reference to values for database update
pub struct CampaignUpdate<'a> {
    pub id: i64,
    pub name: &'a str,
    pub status: &'static str,
    pub budget_total: f64,
    pub budget_daily_cap: f64,
    pub current_daily_budget: f64,
    pub allow_auto_budget_adjustments: bool,
    pub allow_auto_pause: bool,
}

impl<'a> CampaignUpdate<'a> {
    pub fn new(campaign: &'a Campaign) -> Self {
        Self {
            id: campaign.id.into_inner(),
            name: &campaign.name,
            status: campaign.status.as_str(),
            budget_total: campaign.budget_total,
            budget_daily_cap: campaign.budget_daily_cap,
            current_daily_budget: campaign.current_daily_budget,
            allow_auto_budget_adjustments: campaign.allow_auto_budget_adjustments,
            allow_auto_pause: campaign.allow_auto_pause,
        }
    }
}
