use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::{Arc, Once},
};

use tokio::{net::TcpListener, sync::Notify};

static TRACING_INIT: Once = Once::new();
pub fn setup_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(tracing_subscriber::fmt::TestWriter::new())
            .init()
    });
}

/// A running service, stopped when dropped.
pub struct ServerHandle {
    pub addr: SocketAddr,
    pub shutdown: Arc<Notify>,
}

impl ServerHandle {
    pub async fn ingest(data_dir: PathBuf) -> Self {
        let config = ingest_api::config::Config::default_for_test(data_dir);
        let listener = TcpListener::bind(config.address).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let notify = Arc::new(Notify::new());
        let shutdown = notify.clone();

        tokio::spawn(async move {
            ingest_api::server::serve(config, listener, async move { notify.notified().await })
                .await
        });

        Self { addr, shutdown }
    }

    pub async fn policy(ingest_url: String) -> Self {
        let config = policy_api::config::Config::default_for_test(ingest_url);
        let listener = TcpListener::bind(config.address).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let notify = Arc::new(Notify::new());
        let shutdown = notify.clone();

        tokio::spawn(async move {
            policy_api::server::serve(config, listener, async move { notify.notified().await })
                .await
        });

        Self { addr, shutdown }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown.notify_one()
    }
}
