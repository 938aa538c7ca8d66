use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    #[envconfig(default = "127.0.0.1:8001")]
    pub address: SocketAddr,

    /// Directory scanned by `/discover`; quarantined files go to its `quarantine/` child.
    #[envconfig(default = "../../data/sample_files")]
    pub data_dir: PathBuf,

    #[envconfig(default = "false")]
    pub enable_metrics: bool,
}

impl Config {
    pub fn default_for_test(data_dir: PathBuf) -> Self {
        Config {
            address: SocketAddr::from_str("127.0.0.1:0").unwrap(),
            data_dir,
            enable_metrics: false,
        }
    }
}
