//! HTTP server
//!
//! One GET route per registry page, crawler files, a small JSON API and a
//! health check. Middleware: compression, permissive CORS, request tracing.

pub mod error;
pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use moka::future::Cache;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::site::Site;

pub use error::AppError;
use handlers::{api, pages};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    /// Rendered HTML keyed by "page:<path>"
    pub cache: Cache<String, String>,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        let ttl = site.config().cache_ttl_secs;
        let max_capacity = (site.registry().len() as u64).max(1) * 4;

        tracing::info!("Initializing Moka cache (ttl {}s)...", ttl);
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl))
            .build();

        Self {
            site: Arc::new(site),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new();

    // HTML pages, one static route each
    for path in state.site.registry().paths() {
        router = router.route(path, get(pages::page));
    }

    router
        .route("/health", get(api::health_check))
        .route("/sitemap.xml", get(pages::sitemap))
        .route("/robots.txt", get(pages::robots))
        .route("/api/pages", get(api::list_pages))
        .route("/api/pages/*path", get(api::get_page))
        .fallback(pages::fallback)
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
