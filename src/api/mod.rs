mod handlers;
mod models;

use axum::{
    http::{HeaderName, HeaderValue},
    routing::post,
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::AppState;

pub use handlers::{analyze_code, not_found};
pub use models::{AnalysisRequest, AnalysisResponse, ErrorResponse, Status};

pub fn router(state: AppState) -> Router {
    // Any origin with credentials allowed; the wildcard form is forbidden
    // alongside credentials, so the layer mirrors the request instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/analyze-code", post(analyze_code))
        .fallback(not_found)
        .with_state(state)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-embedder-policy"),
            HeaderValue::from_static("require-corp"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
