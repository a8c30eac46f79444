use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pci_importer_lib::UploadError;
use serde_json::json;
use thiserror::Error;

/// Detail returned for failures whose cause must stay on the server
pub const INTERNAL_ERROR_DETAIL: &str = "Internal server error while processing the file";

/// Failures of the upload endpoint, each mapped to a status code and a `detail` body
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Missing required field: 'file' (spreadsheet upload)")]
    MissingFile,

    #[error("Invalid multipart upload: {message}")]
    Multipart { status: StatusCode, message: String },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Upload(_) | ApiError::MissingFile => StatusCode::BAD_REQUEST,
            ApiError::Multipart { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Oversized bodies keep the 413 the body limit produces, the rest are 400s
impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::Multipart {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Internal(cause) => {
                tracing::error!("Upload processing failed: {}", cause);
                INTERNAL_ERROR_DETAIL.to_string()
            }
            other => {
                tracing::info!(status = status.as_u16(), "Upload rejected: {}", other);
                other.to_string()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
