use thiserror::Error;

/// Failure to obtain a usable listing.
///
/// Every variant is reported to the user as a connection error.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl CheckError {
    /// Whether the request hit the configured timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, CheckError::Network(e) if e.is_timeout())
    }
}
