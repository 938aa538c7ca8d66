use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use common_service::{cors_layer, setup_metrics_routes, status_router};
use tower_http::trace::TraceLayer;

use crate::endpoints;
use crate::index::DocumentIndex;

#[derive(Clone)]
pub struct AppState {
    pub index: DocumentIndex,
    pub data_dir: Arc<PathBuf>,
}

pub fn router(index: DocumentIndex, data_dir: PathBuf, enable_metrics: bool) -> Router {
    let state = AppState {
        index,
        data_dir: Arc::new(data_dir),
    };

    let router = Router::new()
        .route("/", get(endpoints::root))
        .route("/discover", post(endpoints::discover))
        .route("/classify", post(endpoints::classify))
        .route("/documents/:name", get(endpoints::get_document))
        .route("/index", get(endpoints::get_index))
        .route("/action", post(endpoints::action))
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
