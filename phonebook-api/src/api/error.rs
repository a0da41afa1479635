//! Centralized error-to-HTTP mapping
//!
//! Every failure on every handler path funnels through [`ApiError`] and
//! becomes exactly one JSON response `{"error": <message>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// API-boundary errors, one variant per failure condition in the contract.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client-supplied id is not a well-formed storage key
    #[error("malformatted id")]
    MalformattedId,

    /// Payload failed validation; carries the underlying message
    #[error("{0}")]
    Validation(String),

    /// Lookup by a well-formed id matched nothing
    #[error("person not found")]
    PersonNotFound,

    /// Update target does not exist. Distinct from the plain lookup miss:
    /// same status, different message.
    #[error("Person not found")]
    UpdateTargetMissing,

    /// No route and no static file matched
    #[error("unknown endpoint")]
    UnknownEndpoint,

    /// Storage or other internal failure; detail is logged, not leaked
    #[error("internal server error")]
    Internal(#[source] phonebook_common::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformattedId | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PersonNotFound
            | ApiError::UpdateTargetMissing
            | ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(source) = &self {
            tracing::error!("Internal error handling request: {}", source);
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}

impl From<phonebook_common::Error> for ApiError {
    fn from(error: phonebook_common::Error) -> Self {
        match error {
            phonebook_common::Error::MalformattedId(_) => ApiError::MalformattedId,
            other => ApiError::Internal(other),
        }
    }
}

/// Fallback handler behind the static-file service.
pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}
