/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
