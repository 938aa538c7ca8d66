use std::future::ready;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

/// Any origin, any method, any header. The services sit behind a browser UI
/// served from a different port.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// `/_readiness` and `/_liveness`. None of the services run background loops,
/// so answering at all means healthy.
pub fn status_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/_readiness", get(|| ready(StatusCode::OK)))
        .route("/_liveness", get(|| ready(StatusCode::OK)))
}
