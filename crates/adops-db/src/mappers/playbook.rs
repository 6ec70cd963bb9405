//! Playbook entity <-> model mapper

use adops_core::entities::{Platform, Playbook};
use adops_core::error::DomainError;
use adops_core::value_objects::Snowflake;

use crate::models::PlaybookModel;

use super::parse_stored;

/// Convert PlaybookModel to Playbook entity
impl TryFrom<PlaybookModel> for Playbook {
    type Error = DomainError;

    fn try_from(model: PlaybookModel) -> Result<Self, Self::Error> {
        Ok(Playbook {
            id: Snowflake::new(model.id),
            name: model.name,
            objective: model.objective,
            platform: parse_stored("playbooks.platform", &model.platform, Platform::parse)?,
            created_at: model.created_at,
        })
    }
}
