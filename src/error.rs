//! Error types for backend calls
//!
//! Every failure is recoverable: pages turn it into a single error toast.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("No candidate selected")]
    MissingCandidate,

    #[error("Could not read file: {0}")]
    File(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status { status: status.as_u16(), body: err.to_string() }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl ApiError {
    /// Human readable detail for toast descriptions.
    ///
    /// Server errors from the backend carry `{"detail": "..."}`; prefer that
    /// over the raw body.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Status { status, body } => {
                let detail = serde_json::from_str::<serde_json::Value>(body)
                    .ok()
                    .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned));
                match detail {
                    Some(detail) => detail,
                    None if body.trim().is_empty() => format!("HTTP {}", status),
                    None => body.trim().to_string(),
                }
            }
            other => other.to_string(),
        }
    }
}
