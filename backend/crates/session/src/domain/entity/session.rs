//! Session Entity
//!
//! One row per logged-in session. The row is the unit of revocation:
//! deleting it ends the session. `refresh_token` holds the single
//! current refresh credential; issuing a new one atomically invalidates
//! the prior value (see the store's conditional rotate).

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::{email::Email, user_id::UserId};

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque, client-visible primary lookup key
    pub session_id: String,
    /// Owning user
    pub user_id: UserId,
    /// The one currently valid refresh token for this session
    pub refresh_token: String,
    /// Breach notification target, denormalized from the user record
    pub email: Email,
    /// Session expiration
    pub expires_at: DateTime<Utc>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last successful rotation, if any
    pub rotated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a new session with a fresh opaque id
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, email: Email, refresh_token: String, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id,
            refresh_token,
            email,
            expires_at: now + ttl,
            created_at: now,
            rotated_at: None,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Check ownership against a separately supplied identity
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session::new(
            UserId::new(),
            Email::from_db("owner@example.com"),
            "h.p.s".to_string(),
            Duration::days(7),
        )
    }

    #[test]
    fn test_new_session_is_live() {
        let session = sample();
        assert!(!session.is_expired());
        assert!(session.rotated_at.is_none());
        assert!(!session.session_id.is_empty());
    }

    #[test]
    fn test_ownership() {
        let session = sample();
        let owner = session.user_id;
        assert!(session.is_owned_by(&owner));
        assert!(!session.is_owned_by(&UserId::new()));
    }

    #[test]
    fn test_expiry() {
        let mut session = sample();
        session.expires_at = Utc::now() - Duration::seconds(1);
        assert!(session.is_expired());
    }
}
