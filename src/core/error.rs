use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Format mismatch: {0}")]
    FormatMismatch(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notification(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error occurred".to_string(),
                    None,
                )
            }
            AppError::Validation(ref msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                msg.clone(),
                Some(vec![msg.clone()]),
            ),
            AppError::UnsupportedMediaType(ref msg) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, msg.clone(), None)
            }
            AppError::FormatMismatch(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Storage(ref msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Storage error occurred".to_string(),
                    None,
                )
            }
            // Publish failures are logged at the call site and never fail the
            // request; this arm only exists so the variant maps sanely if it
            // ever escapes.
            AppError::Notification(ref msg) => {
                tracing::error!("Notification error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(Some(message), errors));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_maps_to_422() {
        assert_eq!(
            status_of(AppError::Validation("name is required".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_unsupported_media_type_maps_to_415() {
        assert_eq!(
            status_of(AppError::UnsupportedMediaType("image/gif".into())),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_format_mismatch_maps_to_400() {
        assert_eq!(
            status_of(AppError::FormatMismatch("extension".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_storage_maps_to_500() {
        assert_eq!(
            status_of(AppError::Storage("endpoint unreachable".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
