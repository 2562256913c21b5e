//! API Errors

use thiserror::Error;

/// Failure of a call to the items API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(&'static str),
}

pub type ApiResult<T> = Result<T, ApiError>;
