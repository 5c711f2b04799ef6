use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::flights::OpenSkyError;

pub enum ApiError {
    Validation(String),
    Upstream(OpenSkyError),
}

impl From<OpenSkyError> for ApiError {
    fn from(e: OpenSkyError) -> Self {
        ApiError::Upstream(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_message("validation_failed", &msg)),
            )
                .into_response(),
            ApiError::Upstream(OpenSkyError::RateLimited) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("upstream_rate_limited")),
            )
                .into_response(),
            ApiError::Upstream(e) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::with_message("upstream_error", &e.to_string())),
            )
                .into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: None,
        }
    }

    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
