//! Error types for huesmith

use thiserror::Error;

/// Result type alias for huesmith operations
pub type HuesmithResult<T> = Result<T, HuesmithError>;

/// Main error type for huesmith
#[derive(Error, Debug, Clone)]
pub enum HuesmithError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local input validation failures (prompt too short, malformed hex)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Missing or unusable credential
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Upstream completion provider failure, carrying the raw payload
    #[error("Upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    /// Image could not be opened or sampled
    #[error("Decode error: {0}")]
    Decode(String),

    /// A submission is already draining its response stream
    #[error("A palette request is already in flight")]
    Busy,

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),
}

impl HuesmithError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new authentication error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    /// Create a new upstream error from a status code and raw payload
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Create a new decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<std::io::Error> for HuesmithError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for HuesmithError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<reqwest::Error> for HuesmithError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}

impl From<image::ImageError> for HuesmithError {
    fn from(error: image::ImageError) -> Self {
        Self::Decode(error.to_string())
    }
}
