use std::future::Future;
use std::sync::Arc;

use ingest_api::client::IngestClient;
use tokio::net::TcpListener;

use crate::{
    config::Config,
    router::router,
    sources::{DocumentSource, IngestIndexSource},
};

pub async fn serve<F>(config: Config, listener: TcpListener, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let source: Option<Arc<dyn DocumentSource>> = match &config.ingest_url {
        Some(url) => {
            let client = IngestClient::new(url)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
            tracing::info!(ingest_url = %client.base_url(), "answering from the ingest index");
            Some(Arc::new(IngestIndexSource::new(client)))
        }
        None => {
            tracing::info!("no ingest url configured, requests must carry docs");
            None
        }
    };

    let app = router(source, config.max_body_size, config.enable_metrics);
    common_service::serve(app, listener, shutdown).await
}
