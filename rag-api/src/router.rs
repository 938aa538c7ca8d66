use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use common_service::{cors_layer, setup_metrics_routes, status_router};
use tower_http::trace::TraceLayer;

use crate::endpoints;
use crate::sources::DocumentSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Option<Arc<dyn DocumentSource>>,
}

pub fn router(
    source: Option<Arc<dyn DocumentSource>>,
    max_body_size: usize,
    enable_metrics: bool,
) -> Router {
    let state = AppState { source };

    let router = Router::new()
        .route("/", get(endpoints::root))
        .route(
            "/rag",
            post(endpoints::rag).layer(DefaultBodyLimit::max(max_body_size)),
        )
        .with_state(state)
        .merge(status_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Installing a global recorder when used as a library (during tests etc)
    // does not work well.
    if enable_metrics {
        setup_metrics_routes(router)
    } else {
        router
    }
}
