//! Entity ↔ model mappers
//!
//! Model → entity conversions are fallible because status and platform
//! columns are stored as TEXT and must parse back into domain enums.

mod bot;
mod bot_run;
mod campaign;
mod change_log;
mod playbook;

pub use bot::BotInsert;
pub use bot_run::BotRunInsert;
pub use campaign::CampaignUpdate;
pub use change_log::ChangeLogInsert;

use adops_core::DomainError;

/// Parse a stored TEXT column into a domain enum
pub(crate) fn parse_stored<T>(
    field: &'static str,
    value: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, DomainError> {
    parse(value).ok_or_else(|| DomainError::InvalidStoredValue {
        field,
        value: value.to_string(),
    })
}
