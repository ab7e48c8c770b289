use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::QueryFlags;
use crate::features::logs::dtos::TranscriptOptions;
use crate::features::logs::services::TranscriptFormatter;
use crate::features::threads::ThreadStore;
use crate::shared::constants::DEFAULT_TRANSCRIPT_CONTENT_TYPE;

/// Collaborators of the transcript route
#[derive(Clone)]
pub struct LogState {
    pub threads: Arc<dyn ThreadStore>,
    pub formatter: Arc<dyn TranscriptFormatter>,
}

/// Render the transcript of a thread
///
/// `simple` hides bot and staff-internal messages, `verbose` adds message
/// numbers and DM ids. Both are set by presence alone.
pub async fn get_log(
    State(state): State<LogState>,
    path: std::result::Result<Path<String>, PathRejection>,
    flags: QueryFlags,
) -> Result<Response> {
    // Undecodable ids cannot name a thread
    let Path(thread_id) =
        path.map_err(|e| AppError::NotFound(format!("Invalid thread id: {}", e)))?;

    let thread = state
        .threads
        .find_by_id(&thread_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Thread '{}' not found", thread_id)))?;

    let messages = state.threads.messages(&thread).await?;

    let transcript = state
        .formatter
        .format_log(&thread, &messages, TranscriptOptions::from(flags))
        .await?;

    let content_type = transcript
        .content_type
        .unwrap_or_else(|| DEFAULT_TRANSCRIPT_CONTENT_TYPE.to_string());

    tracing::debug!(
        "Serving transcript for thread {} ({} messages)",
        thread.id,
        messages.len()
    );

    Ok(([(header::CONTENT_TYPE, content_type)], transcript.content).into_response())
}
