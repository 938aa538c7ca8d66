use axum::{
    routing::{get, post},
    Router,
};
use common_service::{cors_layer, setup_metrics_routes, status_router};
use ingest_api::client::IngestClient;
use tower_http::trace::TraceLayer;

use crate::endpoints;
use crate::store::PolicyStore;

#[derive(Clone)]
pub struct AppState {
    pub store: PolicyStore,
    pub ingest: IngestClient,
}

pub fn router(store: PolicyStore, ingest: IngestClient, enable_metrics: bool) -> Router {
    let state = AppState { store, ingest };

    let router = Router::new()
        .route("/", get(endpoints::root))
        .route(
            "/policies",
            get(endpoints::list_policies)
                .post(endpoints::upsert_policy)
                .delete(endpoints::clear_policies),
        )
        .route("/apply", post(endpoints::apply))
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
