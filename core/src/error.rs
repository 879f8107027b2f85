use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("sitemap limit exceeded: {0}")]
    SitemapLimit(String),

    #[error("date error: {0}")]
    Date(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
