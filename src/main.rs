use std::net::SocketAddr;
use std::sync::Arc;

use media_shelf::{
    AppState, BunnyClient, FsLister, MetadataEnricher, Result, ShelfConfig, ShelfError,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ShelfConfig::from_env()?;

    let lister = Arc::new(FsLister::new(config.root.clone()));
    let cdn = Arc::new(BunnyClient::new(
        config.api_key.clone(),
        config.library_id.clone(),
    ));
    let state = AppState {
        enricher: Arc::new(MetadataEnricher::new(lister, cdn)),
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|_| ShelfError::InvalidConfig {
            message: format!("Invalid listen address {}:{}", config.host, config.port),
        })?;

    media_shelf::server::serve(addr, state).await
}
