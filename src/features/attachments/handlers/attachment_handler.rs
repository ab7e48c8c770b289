use std::io;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::Response,
};
use futures::TryStreamExt;
use tokio_util::io::ReaderStream;

use crate::core::error::{AppError, Result};
use crate::features::attachments::dtos::ContentType;
use crate::modules::storage::{AttachmentId, AttachmentStore};
use crate::shared::validation::ATTACHMENT_FILENAME_REGEX;

/// Collaborators of the attachment route
#[derive(Clone)]
pub struct AttachmentState {
    pub store: Arc<dyn AttachmentStore>,
    /// Bytes read from disk per body chunk
    pub chunk_size: usize,
}

/// Stream a stored attachment
///
/// The id selects the file; the filename only decides the content type.
/// Every validation failure and every missing file is a plain 404.
pub async fn get_attachment(
    State(state): State<AttachmentState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<Response> {
    let Path((raw_id, filename)) =
        path.map_err(|e| AppError::NotFound(format!("Unreadable attachment path: {}", e)))?;

    let id = AttachmentId::parse(&raw_id)
        .ok_or_else(|| AppError::NotFound(format!("Invalid attachment id '{}'", raw_id)))?;

    if !ATTACHMENT_FILENAME_REGEX.is_match(&filename) {
        return Err(AppError::NotFound(format!(
            "Invalid attachment filename '{}'",
            filename
        )));
    }

    let file_path = state.store.local_path(&id);

    let metadata = match tokio::fs::metadata(&file_path).await {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => {
            return Err(AppError::NotFound(format!(
                "Attachment {} is not a regular file",
                id
            )))
        }
        Err(e) => {
            return Err(AppError::NotFound(format!(
                "Attachment {} unavailable: {}",
                id, e
            )))
        }
    };

    let file = tokio::fs::File::open(&file_path).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AppError::NotFound(format!("Attachment {} vanished", id)),
        _ => AppError::Io(e),
    })?;

    let content_type = ContentType::from_filename(&filename);

    // Dropped with the response body when the client goes away, closing the file
    let stream = ReaderStream::with_capacity(file, state.chunk_size).inspect_err(move |e| {
        tracing::warn!("Attachment {} stream failed mid-transfer: {}", id, e);
    });

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.to_header_value())
        .header(header::CONTENT_LENGTH, metadata.len())
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::Internal(format!("Failed to build attachment response: {}", e)))
}
