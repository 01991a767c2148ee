use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::store::StoreError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable error description.
    #[schema(example = "All fields are required")]
    pub error: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// A required request field is missing or empty.
    Validation(String),
    /// The supplied index is absent, non-numeric, negative, or (for edit)
    /// past the end of the collection.
    InvalidIndex,
    /// The index points past the end of the collection.
    NotFound,
    /// Reading the submissions file failed.
    StorageRead(String),
    /// Writing the submissions file failed. The previously persisted array
    /// is still intact on disk.
    StorageWrite(String),
    /// The submissions file does not hold a valid JSON array.
    CorruptStore(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody { error: message })
            }
            AppError::InvalidIndex => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Invalid index".into(),
                },
            ),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Submission not found".into(),
                },
            ),
            AppError::StorageRead(detail) => {
                tracing::error!("Failed to read submissions: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Unable to read submissions".into(),
                    },
                )
            }
            AppError::StorageWrite(detail) => {
                tracing::error!("Failed to write submissions: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Unable to save submissions".into(),
                    },
                )
            }
            AppError::CorruptStore(detail) => {
                tracing::error!("Submissions file is corrupt: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Error parsing submissions JSON".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Read(e) => AppError::StorageRead(e.to_string()),
            StoreError::Write(e) => AppError::StorageWrite(e.to_string()),
            StoreError::Corrupt(e) => AppError::CorruptStore(e.to_string()),
            StoreError::OutOfRange { .. } => AppError::NotFound,
        }
    }
}
