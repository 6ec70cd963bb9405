//! Optional validated JSON extractor
//!
//! The apply endpoint treats a missing body as "use the defaults", so the
//! extractor yields `None` for empty requests. Present bodies must parse as
//! JSON and pass their `validator` checks.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_LENGTH,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// JSON body extractor that tolerates an absent body
#[derive(Debug, Clone)]
pub struct OptionalValidatedJson<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for OptionalValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_body(&req) {
            return Ok(Self(None));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;
        value.validate()?;

        Ok(Self(Some(value)))
    }
}

fn has_body(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .is_some_and(|len| len > 0)
}

fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_query(e.to_string()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_query(e.to_string()),
        _ => ApiError::invalid_query("Invalid JSON body"),
    }
}
