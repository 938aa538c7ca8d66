use std::net::SocketAddr;
use std::str::FromStr;

use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(default = "127.0.0.1:8002")]
    pub address: SocketAddr,

    #[envconfig(default = "http://localhost:8001")]
    pub ingest_url: String,

    #[envconfig(default = "false")]
    pub enable_metrics: bool,
}

impl Config {
    pub fn default_for_test(ingest_url: String) -> Self {
        Config {
            address: SocketAddr::from_str("127.0.0.1:0").unwrap(),
            ingest_url,
            enable_metrics: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::init_from_hashmap(&Default::default()).unwrap();
        assert_eq!(
            config.address,
            SocketAddr::from_str("127.0.0.1:8002").unwrap()
        );
        assert_eq!(config.ingest_url, "http://localhost:8001");
        assert!(!config.enable_metrics);
    }
}
