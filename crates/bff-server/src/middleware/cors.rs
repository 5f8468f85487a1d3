use axum::http::Method;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// CORS for browser clients on any origin, with cookies allowed.
///
/// Credentials rule out wildcards, so origin and headers are mirrored from
/// the request instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_credentials(true)
}
