use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue, Method},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::error::not_found;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

/// Answer every method but GET like an unknown path.
///
/// axum's `get` routes also serve HEAD, so this runs ahead of routing.
pub async fn get_only(request: Request, next: Next) -> Response {
    if request.method() != Method::GET {
        tracing::debug!("Rejecting {} {}", request.method(), request.uri().path());
        return not_found();
    }

    next.run(request).await
}

/// Read-only CORS: any header, GET/OPTIONS only
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

/// Hardening headers added to every response that does not set them itself.
///
/// No `X-Frame-Options`: transcripts must stay embeddable in dashboards.
pub fn security_headers(config: &AppConfig) -> Vec<(HeaderName, HeaderValue)> {
    let mut headers = vec![
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (
            header::X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ),
        (header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")),
        (
            HeaderName::from_static("x-download-options"),
            HeaderValue::from_static("noopen"),
        ),
        (
            HeaderName::from_static("x-permitted-cross-domain-policies"),
            HeaderValue::from_static("none"),
        ),
        (
            HeaderName::from_static("origin-agent-cluster"),
            HeaderValue::from_static("?1"),
        ),
    ];

    if config.hsts_max_age_secs > 0 {
        let hsts = format!("max-age={}; includeSubDomains", config.hsts_max_age_secs);
        if let Ok(value) = HeaderValue::from_str(&hsts) {
            headers.push((header::STRICT_TRANSPORT_SECURITY, value));
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_config(hsts_max_age_secs: u64) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8890,
            cors_allowed_origins: vec!["*".to_string()],
            hsts_max_age_secs,
        }
    }

    #[test]
    fn test_security_headers_skip_frame_options() {
        let headers = security_headers(&app_config(0));

        assert!(headers
            .iter()
            .any(|(name, value)| *name == header::X_CONTENT_TYPE_OPTIONS && *value == "nosniff"));
        assert!(!headers
            .iter()
            .any(|(name, _)| *name == header::X_FRAME_OPTIONS));
        assert!(!headers
            .iter()
            .any(|(name, _)| *name == header::STRICT_TRANSPORT_SECURITY));
    }

    #[test]
    fn test_hsts_uses_configured_max_age() {
        let headers = security_headers(&app_config(600));

        let hsts = headers
            .iter()
            .find(|(name, _)| *name == header::STRICT_TRANSPORT_SECURITY)
            .map(|(_, value)| value.to_str().unwrap().to_string());
        assert_eq!(hsts.as_deref(), Some("max-age=600; includeSubDomains"));
    }

    #[test]
    fn test_request_ids_are_unique() {
        let request = axum::http::Request::new(());
        let mut make = MakeRequestUuid;

        let first = make.make_request_id(&request).unwrap();
        let second = make.make_request_id(&request).unwrap();

        assert_ne!(first.header_value(), second.header_value());
    }
}
