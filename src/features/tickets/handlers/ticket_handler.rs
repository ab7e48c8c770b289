use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::QueryFlags;
use crate::features::threads::models::Thread;
use crate::features::tickets::dtos::{TicketFilter, TicketStatsRow};
use crate::features::tickets::services::TicketStore;
use crate::shared::types::ErrorBody;

/// List tickets, newest thread number first
///
/// `open` and `closed` restrict the listing by status; they are flags set by
/// presence and cannot be combined.
#[utoipa::path(
    get,
    path = "/api/v1/tickets",
    params(
        ("open" = Option<String>, Query, description = "Only open tickets (flag, value ignored)"),
        ("closed" = Option<String>, Query, description = "Only closed tickets (flag, value ignored)")
    ),
    responses(
        (status = 200, description = "Tickets ordered by thread number descending", body = Vec<Thread>),
        (status = 400, description = "Both open and closed were given", body = ErrorBody)
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(store): State<Arc<dyn TicketStore>>,
    flags: QueryFlags,
) -> Result<Json<Vec<Thread>>> {
    let filter = TicketFilter::from_flags(&flags)?;
    let tickets = store.list(filter).await?;
    Ok(Json(tickets))
}

/// Count tickets per status
#[utoipa::path(
    get,
    path = "/api/v1/ticketStats",
    responses(
        (status = 200, description = "One row per status present", body = Vec<TicketStatsRow>)
    ),
    tag = "tickets"
)]
pub async fn ticket_stats(
    State(store): State<Arc<dyn TicketStore>>,
) -> Result<Json<Vec<TicketStatsRow>>> {
    let stats = store.stats().await?;
    Ok(Json(stats))
}
