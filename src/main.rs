//! Site Backend - Main entry point
//!
//! Loads configuration, wires the upstream client and in-memory stores into the
//! HTTP router, and serves until interrupted.

use anyhow::Result;
use site_backend::client::{AsyncChatClient, AsyncChatClientImpl};
use site_backend::{AppState, ChatClient, Config, Metrics};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting site backend with chat API URL: {}", config.chat_api_url);
    if config.chat_api_key.is_empty() {
        warn!("CHAT_API_KEY is not set; chat requests will be rejected upstream");
    }

    let metrics = Metrics::new();

    // Initialize upstream client
    let sync_client = ChatClient::new(&config).with_metrics(metrics.clone());
    let client = Arc::new(AsyncChatClientImpl::new(sync_client)) as Arc<dyn AsyncChatClient>;

    let addr = config.bind_addr;
    let state = AppState::in_memory(config, client, metrics);

    site_backend::server::run_server(state, addr).await?;

    info!("Site backend shutdown complete");
    Ok(())
}
