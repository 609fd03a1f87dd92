use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexError {
    #[error("not found: {message}")]
    NotFound { message: String },
    #[error("{error_type} (HTTP {status}): {message}")]
    Api {
        status: u16,
        error_type: String,
        message: String,
    },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid endpoint '{endpoint}': {reason}")]
    Endpoint { endpoint: String, reason: String },
}

impl LexError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LexError::NotFound { .. })
    }
}
