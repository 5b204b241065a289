//! Session Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Every terminal outcome of the refresh protocol is a distinct variant
//! with a stable discriminant code and a fixed user-facing message.
//! `SessionUnknown` and `OwnerMismatch` deliberately share one message so
//! the response does not reveal which condition fired; telemetry keeps
//! them apart via the discriminant.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
#[derive(Debug, Error)]
pub enum SessionError {
    /// Session id argument is empty or whitespace-only
    #[error("A session id is required")]
    SessionIdInvalid,

    /// No refresh cookies were sent at all
    #[error("No authentication cookies were sent")]
    AuthCookieMissing,

    /// Some but not all refresh cookie segments are present
    #[error("Malformed authentication cookies")]
    CookiePartial,

    /// Refresh token could not be parsed or its signature does not match
    #[error("Invalid refresh token")]
    TokenInvalid,

    /// No session row exists for the presented session id
    #[error("Something went wrong. Please log in again")]
    SessionUnknown,

    /// The session exists but belongs to a different user
    #[error("Something went wrong. Please log in again")]
    OwnerMismatch,

    /// Refresh token reuse (or a lost rotation race) was detected
    #[error("Not allowed. Please log in again")]
    NotAllowed,

    /// No usable bearer access token accompanied the request
    #[error("Authentication required")]
    Unauthenticated,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Mail delivery error (breach notifications)
///
/// Never escalated into a refresh response; observed at the call site
/// and discarded.
#[derive(Debug, Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.)
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled
    #[error("Email build error: {0}")]
    Build(String),
}

impl SessionError {
    /// Stable discriminant code for clients and telemetry
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::SessionIdInvalid => "SESSION_ID_VALIDATION_ERROR",
            SessionError::AuthCookieMissing => "AUTH_COOKIE_ERROR",
            SessionError::CookiePartial => "FORBIDDEN_ERROR",
            SessionError::TokenInvalid => "TOKEN_INVALID_ERROR",
            SessionError::SessionUnknown => "UNKNOWN_ERROR",
            SessionError::OwnerMismatch => "USER_SESSION_ERROR",
            SessionError::NotAllowed => "NOT_ALLOWED_ERROR",
            SessionError::Unauthenticated => "UNAUTHENTICATED",
            SessionError::Database(_) => "DATABASE_ERROR",
            SessionError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::SessionIdInvalid => StatusCode::BAD_REQUEST,
            SessionError::AuthCookieMissing
            | SessionError::TokenInvalid
            | SessionError::SessionUnknown
            | SessionError::OwnerMismatch
            | SessionError::Unauthenticated => StatusCode::UNAUTHORIZED,
            SessionError::CookiePartial | SessionError::NotAllowed => StatusCode::FORBIDDEN,
            SessionError::Database(_) | SessionError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::SessionIdInvalid => ErrorKind::BadRequest,
            SessionError::AuthCookieMissing
            | SessionError::TokenInvalid
            | SessionError::SessionUnknown
            | SessionError::OwnerMismatch
            | SessionError::Unauthenticated => ErrorKind::Unauthorized,
            SessionError::CookiePartial | SessionError::NotAllowed => ErrorKind::Forbidden,
            SessionError::Database(_) | SessionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SessionError::Database(e) => {
                tracing::error!(error = %e, "Session database error");
            }
            SessionError::Internal(msg) => {
                tracing::error!(message = %msg, "Session internal error");
            }
            SessionError::NotAllowed => {
                tracing::warn!("Refresh token reuse rejected");
            }
            SessionError::CookiePartial => {
                tracing::warn!("Partial refresh cookie set received");
            }
            _ => {
                tracing::debug!(error = %self, "Session error");
            }
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = serde_json::json!({
            "status": "ERROR",
            "code": self.code(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
