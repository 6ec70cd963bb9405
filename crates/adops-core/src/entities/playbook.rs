//! Playbook entity - a named rule-set/objective template a bot executes against

use chrono::{DateTime, Utc};

use crate::entities::Platform;
use crate::value_objects::Snowflake;

/// Playbook entity
///
/// Read-only for this engine; resolved during scheduling and handed to the
/// bot logic alongside the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct Playbook {
    pub id: Snowflake,
    pub name: String,
    pub objective: String,
    pub platform: Platform,
    pub created_at: DateTime<Utc>,
}
