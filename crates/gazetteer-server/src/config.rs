use clap::Parser;
use gazetteer_core::DefaultGazetteer;
use std::path::PathBuf;

/// Settings for the HTTP server, read from flags or `GAZETTEER_*` variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gazetteer-server",
    version,
    about = "Serve a GeoNames country dump over HTTP"
)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "GAZETTEER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind; 0 picks a free one
    #[arg(long, env = "GAZETTEER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path to the tab-separated dump (RU.txt, or RU.txt.gz)
    #[arg(long, env = "GAZETTEER_DATA")]
    pub data: Option<PathBuf>,
}

impl ServerConfig {
    pub fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(DefaultGazetteer::default_dataset_path)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
