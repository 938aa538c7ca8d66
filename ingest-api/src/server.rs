use std::future::Future;

use tokio::net::TcpListener;

use crate::{config::Config, index::DocumentIndex, router::router};

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(data_dir = %config.data_dir.display(), "starting ingest service");

    let app = router(DocumentIndex::new(), config.data_dir, config.enable_metrics);
    common_service::serve(app, listener, shutdown).await
}
