//! Campaign change audit handlers

use axum::extract::{Query, State};

use adops_service::dto::{ChangeLogResponse, ChangesQuery};
use adops_service::ChangeLogService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Recent campaign changes, newest first
///
/// GET /ad-campaign-changes?campaignId=7&artistId=10&limit=50
pub async fn recent_changes(
    State(state): State<AppState>,
    Query(query): Query<ChangesQuery>,
) -> ApiResult<ApiJson<Vec<ChangeLogResponse>>> {
    let service = ChangeLogService::new(state.service_context());
    let changes = service
        .recent_changes(query.campaign_id, query.artist_id, query.limit)
        .await?;

    Ok(ApiJson(
        changes.into_iter().map(ChangeLogResponse::from).collect(),
    ))
}
