//! Data transfer objects exchanged with the API layer

mod requests;
mod responses;

pub use requests::{ApplyActionsRequest, ChangesQuery, RunDueQuery, RunsQuery};
pub use responses::{
    ActionResponse, ApplyActionsResponse, BotRunResponse, ChangeLogResponse, HealthChecks,
    HealthResponse, ReadinessResponse, RunDueBotsResponse, SkippedActionResponse, SummaryResponse,
};
