use crate::core::filter::FilterError;
use crate::core::table::OutputError;
use thiserror::Error;

/// Cloudbit unified error type
#[derive(Error, Debug)]
pub enum CloudError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Snapshot error: {message}")]
    Snapshot { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("{kind} with id {id} does not exist")]
    NotFound { kind: &'static str, id: u64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CloudResult<T> = Result<T, CloudError>;
