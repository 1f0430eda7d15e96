//! tsreport server - HTTP report surface over the tablespace usage pipeline

mod api;
mod pages;

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen address
    pub http_addr: SocketAddr,
    /// Root directory the monitoring jobs drop their log files into
    pub data_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8080".parse().unwrap(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by `TSREPORT_ADDR` and `TSREPORT_DATA_DIR`.
    fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(addr) = env::var("TSREPORT_ADDR") {
            match addr.parse() {
                Ok(parsed) => config.http_addr = parsed,
                Err(e) => warn!("ignoring TSREPORT_ADDR {:?}: {}", addr, e),
            }
        }
        if let Ok(dir) = env::var("TSREPORT_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env();

    info!("Starting tsreport server...");
    info!("Data directory: {:?}", config.data_dir);
    info!("HTTP server: http://{}", config.http_addr);

    let app = api::create_router(config.data_dir.clone());

    let listener = tokio::net::TcpListener::bind(&config.http_addr).await?;
    info!("tsreport server listening on {}", config.http_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
