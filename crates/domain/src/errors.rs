//! Error types used throughout the client
//!
//! [`ApiError`] is the closed set of outcomes the request pipeline can
//! surface. Each variant carries enough context (status, raw body, transport
//! cause) for callers to decide between retrying, showing a message, or
//! logging the user out.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categories of API errors for retry and logout decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Programming or contract errors (bad URL, undecodable payload)
    Contract,
    /// Missing or rejected credentials
    Authentication,
    /// Application-level failure reported by the server
    Server,
    /// Transport failure, no response received
    Network,
}

/// API operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Response contained no data")]
    NoData,

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Authorization required")]
    Unauthorized,

    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Build a server error from a status code and raw body.
    pub fn server(status: u16, body: impl Into<String>) -> Self {
        Self::Server { status, body: body.into() }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::InvalidUrl(_) | Self::NoData | Self::Decoding(_) => ApiErrorCategory::Contract,
            Self::Unauthorized => ApiErrorCategory::Authentication,
            Self::Server { .. } => ApiErrorCategory::Server,
            Self::Network(_) => ApiErrorCategory::Network,
        }
    }

    /// Only transport failures are worth another attempt within the retry
    /// window.
    pub fn is_retryable(&self) -> bool {
        self.category() == ApiErrorCategory::Network
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` for a 404 whose body reports a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Server { status: 404, body } if body.to_ascii_lowercase().contains("not found")
        )
    }

    /// Human-readable message suitable for showing to the user.
    ///
    /// Server bodies shaped like `{"detail": "..."}` are unwrapped so the
    /// backend's own wording reaches the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl(_) => "Invalid request address".to_string(),
            Self::NoData => "The server returned no data".to_string(),
            Self::Decoding(_) => "Could not read the server response".to_string(),
            Self::Server { status, body } => match server_detail(body) {
                Some(detail) if is_duplicate_registration(&detail) => {
                    "This email is already registered. Try signing in.".to_string()
                }
                Some(detail) => detail,
                None => format!("Server error {status}: {body}"),
            },
            Self::Unauthorized => "Please sign in again".to_string(),
            Self::Network(cause) => format!("Network error: {cause}"),
        }
    }
}

fn server_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail").and_then(serde_json::Value::as_str).map(str::to_string)
}

fn is_duplicate_registration(detail: &str) -> bool {
    let lower = detail.to_lowercase();
    lower.contains("already registered") || lower.contains("уже зарегистрирован")
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid configuration value for {key}: {message}")]
    Invalid { key: String, message: String },

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(String),
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
