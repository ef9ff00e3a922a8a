// JSON API handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde::Serialize;

use crate::content::PageKind;
use crate::web::{AppError, AppState};

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub path: String,
    pub kind: PageKind,
    pub title: String,
    pub breadcrumb_label: String,
}

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Every page in registry order.
pub async fn list_pages(State(state): State<AppState>) -> Json<Vec<PageSummary>> {
    let pages = state
        .site
        .registry()
        .pages()
        .iter()
        .map(|p| PageSummary {
            path: p.path.clone(),
            kind: p.kind,
            title: p.seo.title.clone(),
            breadcrumb_label: p.breadcrumb_label.clone(),
        })
        .collect();
    Json(pages)
}

/// Composed page and metadata for one path. `index` addresses the home page.
pub async fn get_page(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let path = match path.trim_matches('/') {
        "" | "index" => "/".to_string(),
        rest => format!("/{}", rest),
    };

    let page = state
        .site
        .compose(&path)
        .ok_or_else(|| AppError::NotFound(format!("Page {} not found", path)))?;
    let metadata = state
        .site
        .metadata(&path)
        .ok_or_else(|| AppError::NotFound(format!("Page {} not found", path)))?;

    Ok(Json(serde_json::json!({
        "page": page,
        "metadata": metadata
    })))
}
