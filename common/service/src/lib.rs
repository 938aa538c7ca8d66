//! HTTP plumbing shared by the docsift services: logging setup, graceful
//! shutdown, permissive CORS, k8s-style status probes and prometheus metrics.

pub mod layers;
pub mod logging;
pub mod prometheus;
pub mod shutdown;

pub use layers::{cors_layer, status_router};
pub use logging::setup_tracing;
pub use prometheus::{setup_metrics_recorder, setup_metrics_routes, track_metrics};
pub use shutdown::graceful_shutdown;

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

/// Serves `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(app: Router, listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!("listening on {:?}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}
