use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use parley_core::error::CoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// A request body passed JSON decoding but holds out-of-range values.
    Validation(String),
    /// A request body could not be decoded into the expected type.
    Rejected(JsonRejection),
    /// The server started without credentials.
    NotConfigured(String),
    /// The settings file could not be written.
    Persistence(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Rejected(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::NotConfigured(msg) => {
                tracing::error!("{msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Persistence(msg) => {
                tracing::error!("settings persistence error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to save settings".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidSetting { .. } => ApiError::Validation(e.to_string()),
            other => ApiError::Persistence(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection)
    }
}
