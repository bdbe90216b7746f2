use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown transformation: {0}")]
    UnknownTransformation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings file: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
