use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use pci_importer_lib::{RoadRecord, validate_upload};

use crate::AppState;
use crate::error::ApiError;

/// Multipart field carrying the spreadsheet
pub const FILE_FIELD: &str = "file";

struct Upload {
    filename: String,
    bytes: Bytes,
}

/// POST /upload_excel/
///
/// Accepts multipart form data with a `file` field holding the spreadsheet.
/// Answers 200 with the validated rows in sheet order, 400 with a `detail`
/// message when the upload is refused, 500 when processing itself fails.
pub async fn upload_excel(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<RoadRecord>>, ApiError> {
    let mut multipart = multipart?;
    let Upload { filename, bytes } = read_upload(&mut multipart).await?;
    tracing::info!(%filename, size = bytes.len(), "Received spreadsheet upload");

    // Decoding is synchronous and CPU-bound, keep it off the async workers
    let policy = state.policy;
    let outcome = tokio::task::spawn_blocking(move || validate_upload(&filename, &bytes, policy))
        .await
        .map_err(|e| ApiError::Internal(format!("validation task failed: {}", e)))?;

    let records = outcome?;
    tracing::info!(records = records.len(), "Upload validated");
    Ok(Json(records))
}

/// Pull the first `file` field out of the form; other fields are ignored
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        return Ok(Upload { filename, bytes });
    }

    Err(ApiError::MissingFile)
}
