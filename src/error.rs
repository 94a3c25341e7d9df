use thiserror::Error;

#[derive(Debug, Error)]
pub enum BadgeError {
    // Upstream lookup errors
    #[error("Model not found")]
    NotFound,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // Response shape errors
    #[error("Response failed schema validation: {0}")]
    SchemaViolation(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    // Auth errors
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Missing credential: {0}")]
    NotConfigured(String),

    // Network errors
    #[error("Rate limited by upstream")]
    RateLimited,

    #[error("Upstream inaccessible: {0}")]
    Inaccessible(String),

    #[error("Network timeout: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    // Startup errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BadgeError {
    /// Text shown as the badge message when this error ends a request.
    pub fn pretty_message(&self) -> String {
        match self {
            BadgeError::NotFound => "not found".to_string(),
            BadgeError::InvalidParameter(_) => "invalid parameter".to_string(),
            BadgeError::SchemaViolation(_) => "invalid response data".to_string(),
            BadgeError::InvalidResponse(msg) if !msg.trim().is_empty() => msg.clone(),
            BadgeError::InvalidResponse(_) => "invalid".to_string(),
            BadgeError::Unauthorized(_) => "access denied".to_string(),
            BadgeError::NotConfigured(_) => "credentials have not been configured".to_string(),
            BadgeError::RateLimited => "rate limited by upstream service".to_string(),
            BadgeError::Inaccessible(_) | BadgeError::Timeout(_) | BadgeError::Network(_) => {
                "inaccessible".to_string()
            }
            BadgeError::InvalidConfig(_) => "improperly configured".to_string(),
        }
    }

    /// True for errors caused by the request itself rather than the upstream.
    pub fn is_user_error(&self) -> bool {
        matches!(self, BadgeError::NotFound | BadgeError::InvalidParameter(_))
    }

    /// Short machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            BadgeError::NotFound => "NOT_FOUND",
            BadgeError::InvalidParameter(_) => "INVALID_PARAMETER",
            BadgeError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            BadgeError::InvalidResponse(_) => "INVALID_RESPONSE",
            BadgeError::Unauthorized(_) => "UNAUTHORIZED",
            BadgeError::NotConfigured(_) => "NOT_CONFIGURED",
            BadgeError::RateLimited => "RATE_LIMITED",
            BadgeError::Inaccessible(_) => "INACCESSIBLE",
            BadgeError::Timeout(_) => "TIMEOUT",
            BadgeError::Network(_) => "NETWORK_ERROR",
            BadgeError::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

impl From<url::ParseError> for BadgeError {
    fn from(err: url::ParseError) -> Self {
        BadgeError::InvalidConfig(err.to_string())
    }
}

/// Type alias for Result with BadgeError
pub type Result<T> = std::result::Result<T, BadgeError>;
