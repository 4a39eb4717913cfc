/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A field value violates its `AN..max N` format or value vocabulary
    #[error("Format error: {0}")]
    Format(String),

    /// A received signature does not match the computed one
    #[error("Signature error: {0}")]
    Signature(String),

    /// The gateway answered with an error message
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Inbound gateway message is missing fields or carries unknown values
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn format(msg: impl Into<String>) -> Self {
        AppError::Format(msg.into())
    }

    pub fn signature(msg: impl Into<String>) -> Self {
        AppError::Signature(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        AppError::Gateway(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        AppError::InvalidResponse(msg.into())
    }

    /// True for errors raised by field validation
    pub fn is_format(&self) -> bool {
        matches!(self, AppError::Format(_))
    }
}
