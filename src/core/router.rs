use std::sync::Arc;

use axum::{response::Response, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::error::not_found;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::attachments::{routes as attachments_routes, AttachmentState};
use crate::features::logs::{routes as logs_routes, LogState, TranscriptFormatter};
use crate::features::threads::ThreadStore;
use crate::features::tickets::{routes as tickets_routes, TicketStore};
use crate::modules::storage::AttachmentStore;

/// Collaborators injected into the handlers
#[derive(Clone)]
pub struct AppServices {
    pub threads: Arc<dyn ThreadStore>,
    pub formatter: Arc<dyn TranscriptFormatter>,
    pub attachments: Arc<dyn AttachmentStore>,
    pub attachment_chunk_size: usize,
    pub tickets: Arc<dyn TicketStore>,
}

/// Assemble the gateway: feature routes, the 404 responder, optional API docs
/// and the process-wide HTTP layers.
pub fn build_router(services: AppServices, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    let mut router = Router::new()
        .merge(logs_routes::routes(LogState {
            threads: services.threads,
            formatter: services.formatter,
        }))
        .merge(attachments_routes::routes(AttachmentState {
            store: services.attachments,
            chunk_size: services.attachment_chunk_size,
        }))
        .merge(tickets_routes::routes(services.tickets));

    if swagger.enabled {
        let mut openapi = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: swagger.title.clone(),
            version: swagger.version.clone(),
            description: swagger.description.clone(),
        }
        .modify(&mut openapi);

        router = router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));
    }

    let router = router.fallback(page_not_found);

    with_http_layers(router, app)
}

fn with_http_layers(router: Router, config: &AppConfig) -> Router {
    let mut router = router
        // Wrong method on a known path is reported like an unknown path
        .layer(axum::middleware::from_fn(middleware::get_only))
        .layer(middleware::cors_layer(&config.cors_allowed_origins));

    for (name, value) in middleware::security_headers(config) {
        router = router.layer(SetResponseHeaderLayer::if_not_present(name, value));
    }

    router
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

async fn page_not_found() -> Response {
    not_found()
}
