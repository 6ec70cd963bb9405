//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use adops_common::{AppConfig, AppError};
use adops_core::SnowflakeGenerator;
use adops_db::{
    create_pool, PgBotRepository, PgBotRunRepository, PgCampaignRepository,
    PgChangeLogRepository, PgCreativeRepository, PgPlaybookRepository,
};
use adops_service::{NoopBotLogic, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes get the baseline stack only so probes keep answering
/// when the rate limiter trips.
pub fn create_app(state: AppState) -> Router {
    let rate_limit = state.config().rate_limit.clone();
    let cors = state.config().cors.clone();
    let is_production = state.config().app.env.is_production();

    let api = apply_middleware_with_config(create_router(), &rate_limit, &cors, is_production);
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = adops_db::DatabaseConfig::from_app(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let bot_repo = Arc::new(PgBotRepository::new(pool.clone()));
    let playbook_repo = Arc::new(PgPlaybookRepository::new(pool.clone()));
    let run_repo = Arc::new(PgBotRunRepository::new(pool.clone()));
    let campaign_repo = Arc::new(PgCampaignRepository::new(pool.clone()));
    let change_log_repo = Arc::new(PgChangeLogRepository::new(pool.clone()));
    let creative_repo = Arc::new(PgCreativeRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .bot_repo(bot_repo)
        .playbook_repo(playbook_repo)
        .run_repo(run_repo)
        .campaign_repo(campaign_repo)
        .change_log_repo(change_log_repo)
        .creative_repo(creative_repo)
        .bot_logic(Arc::new(NoopBotLogic))
        .snowflake_generator(snowflake_generator)
        .scheduler_config(config.scheduler.clone())
        .execution_config(config.execution.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
