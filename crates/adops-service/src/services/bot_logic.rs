//! Default bot logic implementation

use async_trait::async_trait;

use adops_core::entities::{Bot, Playbook};
use adops_core::traits::{BotLogic, BotLogicOutput};
use adops_core::DomainError;

/// Bot logic that recommends nothing
///
/// Stands in until a platform-specific analyzer is wired in. Every run it
/// produces completes with an empty action list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBotLogic;

#[async_trait]
impl BotLogic for NoopBotLogic {
    async fn execute(
        &self,
        _bot: &Bot,
        _playbook: Option<&Playbook>,
    ) -> Result<BotLogicOutput, DomainError> {
        Ok(BotLogicOutput::default())
    }
}
