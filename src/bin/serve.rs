// HTTP Server Entry Point
//
// Usage: cargo run --bin serve
// Environment: SITE_BASE_URL, PORT, CONTENT_DIR, CACHE_TTL_SECS, LOG_FORMAT, RUST_LOG

use practice_pages::{create_router, logging, AppState, Site, SiteConfig};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::from_env();
    logging::init(config.log_format);

    tracing::info!("Starting page server...");
    tracing::info!("Configuration:");
    tracing::info!("  SITE_BASE_URL: {}", config.base_url);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!(
        "  CONTENT_DIR: {}",
        config
            .content_dir
            .as_deref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(builtin only)".to_string())
    );
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl_secs);

    let port = config.port;
    let site = Site::new(config)?;
    let app = create_router(AppState::new(site));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
