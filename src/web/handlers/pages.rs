// HTML page handlers

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::web::{AppError, AppState};

// ============================================================================
// Registry pages
// ============================================================================

/// Serve a registry page. Rendered HTML is cached per path.
pub async fn page(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    let path = uri.path();
    let cache_key = format!("page:{}", path);

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for {}", path);
        return Ok(Html(cached));
    }

    let html = state
        .site
        .render(path)?
        .ok_or_else(|| AppError::NotFound(format!("Page {} not found", path)))?;

    state.cache.insert(cache_key, html.clone()).await;
    Ok(Html(html))
}

/// Unknown paths: redirect `/page/` to `/page` when that page exists,
/// otherwise the HTML 404 page.
pub async fn fallback(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let path = uri.path();

    if path.len() > 1 && path.ends_with('/') {
        let canonical = path.trim_end_matches('/');
        if state.site.registry().get(canonical).is_some() {
            return Ok(Redirect::permanent(canonical).into_response());
        }
    }

    tracing::debug!("No page for {}", path);
    let html = state.site.render_not_found(path)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

// ============================================================================
// Crawler files
// ============================================================================

pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let xml = state.site.sitemap_xml()?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.site.robots_txt(),
    )
}
