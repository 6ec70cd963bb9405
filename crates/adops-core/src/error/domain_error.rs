//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Bot not found: {0}")]
    BotNotFound(Snowflake),

    #[error("Campaign not found: {0}")]
    CampaignNotFound(Snowflake),

    #[error("Playbook not found: {0}")]
    PlaybookNotFound(Snowflake),

    #[error("Bot run not found: {0}")]
    RunNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown {field} value in stored record: {value}")]
    InvalidStoredValue { field: &'static str, value: String },

    // =========================================================================
    // Bot Execution
    // =========================================================================
    #[error("Bot logic failed: {0}")]
    BotExecutionFailed(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::BotNotFound(_) => "UNKNOWN_BOT",
            Self::CampaignNotFound(_) => "UNKNOWN_CAMPAIGN",
            Self::PlaybookNotFound(_) => "UNKNOWN_PLAYBOOK",
            Self::RunNotFound(_) => "UNKNOWN_RUN",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStoredValue { .. } => "INVALID_STORED_VALUE",
            Self::BotExecutionFailed(_) => "BOT_EXECUTION_FAILED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BotNotFound(_)
                | Self::CampaignNotFound(_)
                | Self::PlaybookNotFound(_)
                | Self::RunNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidStoredValue { .. })
    }
}
