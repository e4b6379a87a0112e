//! Error types for the leet-network crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("API error: {0}")]
    Api(#[from] leet_api::ApiError),

    #[error("Invalid user payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
