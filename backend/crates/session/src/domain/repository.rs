//! Repository Traits
//!
//! Interfaces for data persistence and outbound notification.
//! Implementations are in the infrastructure layer. These traits carry
//! no trust logic; all accept/reject decisions belong to the use cases.

use chrono::{DateTime, Utc};

use crate::domain::entity::session::Session;
use crate::domain::value_object::email::Email;
use crate::error::{MailError, SessionResult};

/// Session store trait
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Persist a freshly established session
    async fn insert(&self, session: &Session) -> SessionResult<()>;

    /// Find a session by its opaque id
    async fn find(&self, session_id: &str) -> SessionResult<Option<Session>>;

    /// Atomically swap the stored refresh token, but only if it still
    /// equals `old_token`.
    ///
    /// Returns `false` when the stored token no longer matches - the
    /// caller lost a rotation race or the token was already rotated.
    /// The caller must treat that as token reuse, never retry.
    async fn replace_if_matches(
        &self,
        session_id: &str,
        old_token: &str,
        new_token: &str,
        new_expires_at: DateTime<Utc>,
    ) -> SessionResult<bool>;

    /// Delete a session (revocation)
    async fn remove(&self, session_id: &str) -> SessionResult<()>;

    /// Clean up expired sessions
    async fn purge_expired(&self) -> SessionResult<u64>;
}

/// Breach notifier trait
///
/// Best-effort alert when a presented refresh token does not match the
/// session's stored token. The caller discards the result; a failed
/// delivery never changes the refresh outcome.
#[trait_variant::make(BreachNotifier: Send)]
pub trait LocalBreachNotifier {
    /// Send a token-reuse alert to the session owner
    async fn notify(&self, email: &Email) -> Result<(), MailError>;
}
