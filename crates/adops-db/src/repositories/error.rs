//! Error handling utilities for repositories

use adops_core::error::DomainError;
use adops_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "bot not found" error
pub fn bot_not_found(id: Snowflake) -> DomainError {
    DomainError::BotNotFound(id)
}

/// Create a "campaign not found" error
pub fn campaign_not_found(id: Snowflake) -> DomainError {
    DomainError::CampaignNotFound(id)
}
