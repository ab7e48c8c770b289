use axum::{routing::get, Router};

use crate::features::attachments::handlers::{self, AttachmentState};

/// Create routes for the attachments feature
pub fn routes(state: AttachmentState) -> Router {
    Router::new()
        .route(
            "/attachments/{attachment_id}/{filename}",
            get(handlers::get_attachment),
        )
        .with_state(state)
}
