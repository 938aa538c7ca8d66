use common_service::{graceful_shutdown, setup_tracing};
use envconfig::Envconfig;

use rag_api::config::Config;
use rag_api::server::serve;

#[tokio::main]
async fn main() {
    setup_tracing();

    let config = Config::init_from_env().expect("Invalid configuration:");

    let listener = tokio::net::TcpListener::bind(config.address)
        .await
        .expect("could not bind port");

    if let Err(e) = serve(config, listener, graceful_shutdown()).await {
        tracing::error!("failed to start rag http server, {}", e);
    }
}
