//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use booking::Error as LibError;

/// An error answered as `{"error": "<message>"}` with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// A 400 response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A 500 response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }

    /// The status this error answers with.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<LibError> for ApiError {
    fn from(err: LibError) -> Self {
        let status = match err {
            LibError::NotFoundOrUnauthorized { .. } => StatusCode::NOT_FOUND,
            LibError::Validation { .. } => StatusCode::BAD_REQUEST,
            // Constraint violations stay 500, like any other storage failure.
            LibError::ConstraintViolation { .. }
            | LibError::Storage(_)
            | LibError::Configuration(_)
            | LibError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            log::error!("request failed: {}", self.message);
        } else {
            log::debug!("request rejected ({}): {}", self.status, self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use booking::ConstraintKind;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::from(LibError::NotFoundOrUnauthorized {
            reservation_id: "r".into(),
            customer_id: "c".into(),
        });
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let validation = ApiError::from(LibError::Validation {
            field: "name".into(),
            message: "empty".into(),
        });
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let constraint = ApiError::from(LibError::ConstraintViolation {
            kind: ConstraintKind::PrimaryKey,
            details: "UNIQUE constraint failed".into(),
        });
        assert_eq!(constraint.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
