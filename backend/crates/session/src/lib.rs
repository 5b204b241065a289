//! Session (Refresh Token Rotation) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Session entity, value objects, repository traits
//! - `application/` - Use cases (refresh, establish, logout) and token codec
//! - `infra/` - PostgreSQL store and SMTP breach notifier
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Access tokens are short-lived HS256 JWTs; refresh tokens are long-lived
//!   HS256 JWTs signed with an independent secret
//! - The refresh token travels split across three HTTP-only cookies; no
//!   single cookie carries a usable credential
//! - Exactly one refresh token is valid per session; rotation is an atomic
//!   compare-and-swap on the stored token (no double-spend)
//! - Presenting a superseded refresh token invalidates the session and
//!   triggers a best-effort email alert to the account owner

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::SessionConfig;
pub use error::{MailError, SessionError, SessionResult};
pub use infra::postgres::PgSessionStore;
pub use infra::smtp::SmtpBreachNotifier;
pub use presentation::router::session_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgSessionStore as SessionStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
