use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Custom: {0}")]
    Custom(String),
}
