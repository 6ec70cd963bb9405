//! Route definitions
//!
//! Wires handlers to paths. Health routes are kept separate so they
//! bypass the rate limiter.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{actions, changes, health, orchestration};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Orchestration
        .route("/ad-orchestration/run-due", post(orchestration::run_due_bots))
        .route("/ad-orchestration/summary", get(orchestration::summary))
        .route("/ad-orchestration/runs", get(orchestration::recent_runs))
        // Action execution
        .route("/ad-actions/apply", post(actions::apply_actions))
        // Audit trail
        .route("/ad-campaign-changes", get(changes::recent_changes))
}

/// Create the health check router
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
