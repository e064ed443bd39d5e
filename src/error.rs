use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("{0}")]
    Other(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
