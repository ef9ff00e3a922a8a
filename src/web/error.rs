use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::error::SiteError;

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Render(String),
    Internal(String),
}

impl From<SiteError> for AppError {
    fn from(err: SiteError) -> Self {
        AppError::Render(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Render(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!("{}", message);
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
