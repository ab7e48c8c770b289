use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketStore;

/// Create routes for the tickets API
pub fn routes(store: Arc<dyn TicketStore>) -> Router {
    Router::new()
        .route("/api/v1/tickets", get(handlers::list_tickets))
        .route("/api/v1/ticketStats", get(handlers::ticket_stats))
        .with_state(store)
}
