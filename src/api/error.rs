use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::utils::error::{ErrorCategory, NumerologyError};

impl NumerologyError {
    pub fn status_code(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Input => StatusCode::BAD_REQUEST,
            ErrorCategory::Auth => StatusCode::UNAUTHORIZED,
            ErrorCategory::Configuration | ErrorCategory::System => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for NumerologyError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            NumerologyError::ValidationError { .. } => self.user_friendly_message(),
            NumerologyError::UnauthenticatedError { reason } => reason.clone(),
            _ => {
                tracing::error!("❌ Request failed: {} (Category: {:?})", self, self.category());
                "Error calculating numerology".to_string()
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            NumerologyError::validation("name", "", "empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            NumerologyError::unauthenticated("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            NumerologyError::InternalError {
                message: "boom".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
