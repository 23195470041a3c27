use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type. Every handler returns `Result<_, AppError>`
/// and the response status mirrors the failure kind.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input.
    #[error("{0}")]
    Validation(String),

    /// Missing/invalid/expired token or bad credentials.
    #[error("{0}")]
    Unauthorized(String),

    /// Missing record, or an ownership mismatch deliberately reported the
    /// same way.
    #[error("{0}")]
    NotFound(String),

    /// Operation not applicable in the current state.
    #[error("{0}")]
    InvalidState(String),

    /// Document store failure.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Anything else unexpected.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidState(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body-shape violations (missing field, wrong type, malformed JSON) map to
/// the validation kind rather than axum's default 422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "request failed");
        } else {
            tracing::warn!(error = %self, %status, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_mirror_failure_kind() {
        assert_eq!(
            AppError::Validation("missing field".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Unauthorized("invalid credentials".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::NotFound("book not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidState("no pending cart".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn body_carries_error_message() {
        let err = AppError::NotFound("book not found".into());
        assert_eq!(err.to_string(), "book not found");
    }
}
