use std::future::Future;

use ingest_api::client::IngestClient;
use tokio::net::TcpListener;

use crate::{config::Config, router::router, store::PolicyStore};

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let ingest = IngestClient::new(&config.ingest_url)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    tracing::info!(ingest_url = %ingest.base_url(), "starting policy service");

    let app = router(PolicyStore::new(), ingest, config.enable_metrics);
    common_service::serve(app, listener, shutdown).await
}
