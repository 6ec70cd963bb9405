//! Action execution handlers
//!
//! Endpoint for applying bot recommendations to campaigns.

use axum::extract::State;

use adops_service::dto::{ApplyActionsRequest, ApplyActionsResponse};
use adops_service::ExecutionService;

use crate::extractors::OptionalValidatedJson;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Apply recommendations from recent completed runs
///
/// POST /ad-actions/apply
///
/// The body is optional; a bare POST runs with the default window in
/// dry-run mode.
pub async fn apply_actions(
    State(state): State<AppState>,
    OptionalValidatedJson(body): OptionalValidatedJson<ApplyActionsRequest>,
) -> ApiResult<ApiJson<ApplyActionsResponse>> {
    let request = body.unwrap_or_default();

    let service = ExecutionService::new(state.service_context());
    let outcome = service
        .apply_recent_actions(request.hours_back, request.dry_run())
        .await?;

    Ok(ApiJson(ApplyActionsResponse::from(outcome)))
}
