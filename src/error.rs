use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Content error: {message}")]
    Content { message: String },
}

impl SiteError {
    pub fn content(message: impl Into<String>) -> Self {
        SiteError::Content {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
