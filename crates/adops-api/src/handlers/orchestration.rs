//! Bot orchestration handlers
//!
//! Endpoints for triggering scheduling passes and inspecting bot activity.

use axum::extract::{Query, State};

use adops_service::dto::{BotRunResponse, RunDueBotsResponse, RunDueQuery, RunsQuery, SummaryResponse};
use adops_service::SchedulerService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Run every due bot, bounded by maxBots
///
/// POST /ad-orchestration/run-due?maxBots=10
pub async fn run_due_bots(
    State(state): State<AppState>,
    Query(query): Query<RunDueQuery>,
) -> ApiResult<ApiJson<RunDueBotsResponse>> {
    let service = SchedulerService::new(state.service_context());
    let outcome = service.run_due_bots(query.max_bots).await?;

    Ok(ApiJson(RunDueBotsResponse::from(outcome)))
}

/// Orchestration summary counts
///
/// GET /ad-orchestration/summary
pub async fn summary(State(state): State<AppState>) -> ApiResult<ApiJson<SummaryResponse>> {
    let service = SchedulerService::new(state.service_context());
    let summary = service.summary().await?;

    Ok(ApiJson(SummaryResponse::from(summary)))
}

/// Recent bot runs, optionally filtered to one account
///
/// GET /ad-orchestration/runs?artistId=123&limit=20
pub async fn recent_runs(
    State(state): State<AppState>,
    Query(query): Query<RunsQuery>,
) -> ApiResult<ApiJson<Vec<BotRunResponse>>> {
    let service = SchedulerService::new(state.service_context());
    let runs = service.recent_runs(query.artist_id, query.limit).await?;

    Ok(ApiJson(runs.into_iter().map(BotRunResponse::from).collect()))
}
