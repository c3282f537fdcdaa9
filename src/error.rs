//! Error types for the NYC 311 service-request client

use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Missing credential: set {0}")]
    MissingCredential(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// API-specific errors
///
/// Every failure of a client operation lands in exactly one of these
/// variants. A non-200 response becomes either `Service` (the gateway
/// explained itself) or `UnexpectedStatus` (it did not).
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Service error {status} ({code}): {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failed exchange, when the gateway answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Service { status, .. } | ApiError::UnexpectedStatus { status } => {
                Some(*status)
            }
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::InvalidResponse(_)
            | ApiError::InvalidRequest(_)
            | ApiError::Serialization(_) => None,
        }
    }

    /// Machine-readable error code from a structured gateway failure
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Service { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for ApiError
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = ApiError::Service {
            status: 400,
            code: "BadRequest".into(),
            message: "Problem is required".into(),
        };
        assert_eq!(
            err.to_string(),
            "Service error 400 (BadRequest): Problem is required"
        );
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.code(), Some("BadRequest"));
    }

    #[test]
    fn test_unexpected_status_has_no_code() {
        let err = ApiError::UnexpectedStatus { status: 502 };
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_app_error_wraps_api_error() {
        let err: AppError = ApiError::UnexpectedStatus { status: 500 }.into();
        assert_eq!(err.to_string(), "API error: Unexpected HTTP status 500");
    }
}
