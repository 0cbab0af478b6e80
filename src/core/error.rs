use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::time::Duration;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Error type for the reference server
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for request payloads and path parameters
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("{0} not found")]
    NotFound(String),

    /// Unique-key conflict (duplicate cnpj)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper constructors for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Transport-level failure taxonomy for the contract verifier.
///
/// A server-reported error status is never a `VerifyError`; these variants
/// only cover failures where no usable response arrived at all.
#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    /// The request exceeded the configured time budget. Client-side
    /// cancellation, distinct from any status the server might report.
    #[error("request exceeded the {budget:?} time budget")]
    Timeout { budget: Duration },

    /// The target host refused or never accepted the connection.
    #[error("target unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Any other transport failure (broken connection, protocol error).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("unreadable response body: {0}")]
    InvalidBody(#[source] reqwest::Error),
}

impl VerifyError {
    /// Classify a reqwest error against the budget that was in force.
    pub fn from_request_error(err: reqwest::Error, budget: Duration) -> Self {
        if err.is_timeout() {
            VerifyError::Timeout { budget }
        } else if err.is_connect() {
            VerifyError::Unreachable(err)
        } else {
            VerifyError::Transport(err)
        }
    }

    /// Status class the failure is reported as, when it maps to one.
    ///
    /// An unreachable target is reported as 503 (server-class), while a
    /// timeout stays a client-side failure with no status equivalent.
    pub fn report_status(&self) -> Option<u16> {
        match self {
            VerifyError::Unreachable(_) => Some(503),
            VerifyError::Timeout { .. } => None,
            VerifyError::Transport(_) | VerifyError::InvalidBody(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, VerifyError::Timeout { .. })
    }
}
