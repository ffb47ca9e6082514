use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("refused: {0}")]
    Guarded(String),
    #[error("malformed profiles.ini: {0}")]
    Registry(String),
    #[error("failed to create profile `{name}`: {source}")]
    CreateFailed {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("launch failed: {0}")]
    Launch(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
