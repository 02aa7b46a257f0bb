use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid validation pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Unrecognized option: '{0}'")]
    ParseCommand(String),

    #[error("Stored contacts are corrupted: {0}")]
    CorruptData(String),

    #[error("{0}")]
    Validation(String),
}
