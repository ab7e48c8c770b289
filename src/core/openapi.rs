use utoipa::{Modify, OpenApi};

use crate::features::threads::models as threads_models;
use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers};
use crate::shared::types::ErrorBody;

/// OpenAPI document for the JSON routes.
///
/// `/logs` and `/attachments` serve text and files for browsers and are left out.
#[derive(OpenApi)]
#[openapi(
    paths(
        tickets_handlers::list_tickets,
        tickets_handlers::ticket_stats,
    ),
    components(
        schemas(
            threads_models::Thread,
            tickets_dtos::TicketStatsRow,
            ErrorBody,
        )
    ),
    tags(
        (name = "tickets", description = "Modmail threads exposed as tickets (read-only)"),
    ),
    info(
        title = "Modmail Gateway API",
        version = "0.1.0",
        description = "Read-only ticket API for the modmail gateway",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
