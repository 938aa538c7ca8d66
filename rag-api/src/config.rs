use std::net::SocketAddr;
use std::str::FromStr;

use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(default = "127.0.0.1:8000")]
    pub address: SocketAddr,

    /// When set, requests without `docs` are answered from this ingest service's index.
    pub ingest_url: Option<String>,

    #[envconfig(default = "5000000")]
    pub max_body_size: usize,

    #[envconfig(default = "false")]
    pub enable_metrics: bool,
}

impl Config {
    pub fn default_for_test() -> Self {
        Config {
            address: SocketAddr::from_str("127.0.0.1:0").unwrap(),
            ingest_url: None,
            max_body_size: 5_000_000,
            enable_metrics: false,
        }
    }
}
