use crate::models::MatchResponse;
use crate::services::RepositoryError;
use actix_web::{error, http::StatusCode, HttpResponse};
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by the match request handler
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Failed to fetch available helpers: {0}")]
    UpstreamFetch(#[from] RepositoryError),

    #[error("Timed out after {0:?} waiting for available helpers")]
    UpstreamTimeout(Duration),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MatchError {
    /// Stable error code reported in failed responses
    pub fn code(&self) -> &'static str {
        match self {
            MatchError::Validation(_) => "validation_error",
            MatchError::UpstreamFetch(_) => "upstream_unavailable",
            MatchError::UpstreamTimeout(_) => "upstream_timeout",
            MatchError::Internal(_) => "internal_error",
        }
    }

    /// Message safe to return to callers
    pub fn public_message(&self) -> String {
        match self {
            MatchError::Internal(_) => "Internal error while matching helpers".to_string(),
            other => other.to_string(),
        }
    }

    /// Failure response tagged with the id of an already validated request
    pub fn response_for(&self, request_id: Option<&str>) -> HttpResponse {
        let body = MatchResponse::failure(self.code(), self.public_message());
        let body = match request_id {
            Some(id) => body.with_request_id(id),
            None => body,
        };

        HttpResponse::build(error::ResponseError::status_code(self)).json(body)
    }
}

impl error::ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::Validation(_) => StatusCode::BAD_REQUEST,
            MatchError::UpstreamFetch(_) => StatusCode::BAD_GATEWAY,
            MatchError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            MatchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.response_for(None)
    }
}

/// Handle JSON payload errors with the same failure body as the match endpoint
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    MatchError::Validation(format!("Invalid JSON: {}", err)).into()
}
