//! Bot logic trait - the seam for external platform analysis
//!
//! The actual performance analysis (YouTube/Meta/TikTok/Google Ads API calls)
//! lives outside this engine. The scheduler only cares about the actions a
//! bot recommends and any errors it hit along the way.

use async_trait::async_trait;

use crate::entities::{Action, Bot, Playbook};
use crate::error::DomainError;

/// What one bot execution produced
#[derive(Debug, Clone, Default)]
pub struct BotLogicOutput {
    /// Ordered recommendations
    pub actions: Vec<Action>,
    /// Non-fatal errors hit while analyzing; a non-empty list marks the run Partial
    pub errors: Vec<String>,
}

/// External bot decision logic
///
/// An `Err` marks the whole run Failed; `Ok` with errors marks it Partial.
#[async_trait]
pub trait BotLogic: Send + Sync {
    async fn execute(
        &self,
        bot: &Bot,
        playbook: Option<&Playbook>,
    ) -> Result<BotLogicOutput, DomainError>;
}
