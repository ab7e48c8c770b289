use axum::{routing::get, Router};

use crate::features::logs::handlers::{self, LogState};

/// Create routes for the transcript feature
pub fn routes(state: LogState) -> Router {
    Router::new()
        .route("/logs/{thread_id}", get(handlers::get_log))
        .with_state(state)
}
