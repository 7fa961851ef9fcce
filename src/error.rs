//! Error types for the generation gateway.

use thiserror::Error;

/// Primary error type for all gateway operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No generation backend available: {0}")]
    NoBackendAvailable(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Rate limited: retry after {retry_after_ms:?}ms")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Broad error category for routing fallback logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Availability,
    ModelNotFound,
    RateLimit,
    Authentication,
    Api,
    Response,
    Network,
    Serialization,
    Argument,
}

impl GatewayError {
    /// Create an API error for a non-success status.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::NoBackendAvailable(_) => ErrorCategory::Availability,
            Self::ModelNotFound(_) => ErrorCategory::ModelNotFound,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::Api { .. } => ErrorCategory::Api,
            Self::MalformedResponse(_) => ErrorCategory::Response,
            Self::Network(_) => ErrorCategory::Network,
            Self::Serialization(_) => ErrorCategory::Serialization,
            Self::InvalidArgument(_) => ErrorCategory::Argument,
        }
    }

    /// Whether trying the next candidate model can help.
    ///
    /// Unknown/deprecated model identifiers and quota exhaustion are tied to
    /// one candidate; bad credentials or malformed requests doom the whole
    /// chain.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::ModelNotFound | ErrorCategory::RateLimit | ErrorCategory::Network
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GatewayError>;
