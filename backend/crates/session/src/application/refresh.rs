//! Refresh Use Case
//!
//! The protocol engine for refresh-token rotation with theft detection.
//! Rules are evaluated in order; the first match produces the terminal
//! outcome:
//!
//! 1. blank session id            -> `SessionIdInvalid`
//! 2. no cookies at all           -> `AuthCookieMissing`
//! 3. partial cookie set          -> `CookiePartial`
//! 4. malformed / bad signature   -> `TokenInvalid` (no storage access)
//! 5. unknown session             -> `SessionUnknown`
//! 6. owner mismatch              -> `OwnerMismatch`
//! 7. stale token or lost race    -> `NotAllowed` (+ breach alert)
//! 8. otherwise                   -> rotate and return fresh tokens
//!
//! An expired-but-well-signed refresh token still gets a grace path: the
//! caller's claimed identity (decoded upstream from a possibly expired
//! access token) stands in for the token's own subject at step 6. The
//! two identity sources are kept separate until that single comparison.

use std::sync::Arc;

use chrono::{Duration, Utc};
use platform::crypto::constant_time_eq;

use crate::application::config::SessionConfig;
use crate::application::token::{VerifiedToken, sign_token, verify_token};
use crate::domain::entity::session::Session;
use crate::domain::repository::{BreachNotifier, SessionStore};
use crate::domain::value_object::cookie_set::CookieSet;
use crate::domain::value_object::user_id::UserId;
use crate::error::{SessionError, SessionResult};

/// Refresh input
#[derive(Debug, Clone)]
pub struct RefreshInput {
    /// Opaque session id from the request argument
    pub session_id: String,
    /// The refresh cookie segments as presented by the request
    pub cookies: CookieSet,
    /// Caller identity resolved upstream from the bearer access token
    /// (signature checked, expiry ignored)
    pub claimed_user_id: UserId,
}

/// Refresh output: the rotated credentials
#[derive(Debug, Clone)]
pub struct RefreshedTokens {
    /// Fresh short-lived access token (payload)
    pub access_token: String,
    /// Fresh long-lived refresh token (cookies)
    pub refresh_token: String,
    /// New session expiry matching the refresh token
    pub refresh_expires_at: chrono::DateTime<Utc>,
}

/// Refresh use case
pub struct RefreshUseCase<S, N>
where
    S: SessionStore,
    N: BreachNotifier,
{
    store: Arc<S>,
    notifier: Arc<N>,
    config: Arc<SessionConfig>,
}

impl<S, N> RefreshUseCase<S, N>
where
    S: SessionStore,
    N: BreachNotifier,
{
    pub fn new(store: Arc<S>, notifier: Arc<N>, config: Arc<SessionConfig>) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    pub async fn execute(&self, input: RefreshInput) -> SessionResult<RefreshedTokens> {
        if input.session_id.trim().is_empty() {
            return Err(SessionError::SessionIdInvalid);
        }

        let presented = match input.cookies.reconstruct() {
            Some(token) => token,
            None if input.cookies == CookieSet::Absent => {
                return Err(SessionError::AuthCookieMissing);
            }
            None => return Err(SessionError::CookiePartial),
        };

        // Signature check before any storage access; garbage input must
        // cause zero lookups and zero notifications.
        let expected_owner = match verify_token(&presented, &self.config.refresh_secret)? {
            VerifiedToken::Valid(claims) => claims.subject()?,
            // Grace path: the token's own claims are past expiry, so the
            // upstream claimed identity is the identity input instead.
            VerifiedToken::Expired(_) => input.claimed_user_id,
        };

        let session = self
            .store
            .find(&input.session_id)
            .await?
            .ok_or(SessionError::SessionUnknown)?;

        if !session.is_owned_by(&expected_owner) {
            return Err(SessionError::OwnerMismatch);
        }

        if !constant_time_eq(presented.as_bytes(), session.refresh_token.as_bytes()) {
            // The stored token has already moved on: someone is replaying
            // a superseded credential.
            self.alert_breach(&session).await;
            return Err(SessionError::NotAllowed);
        }

        let access_token = sign_token(
            &session.user_id,
            &self.config.access_secret,
            self.config.access_ttl,
        )?;
        let refresh_token = sign_token(
            &session.user_id,
            &self.config.refresh_secret,
            self.config.refresh_ttl,
        )?;
        let refresh_expires_at =
            Utc::now() + Duration::seconds(self.config.refresh_ttl.as_secs() as i64);

        let rotated = self
            .store
            .replace_if_matches(
                &input.session_id,
                &presented,
                &refresh_token,
                refresh_expires_at,
            )
            .await?;

        if !rotated {
            // A concurrent call rotated first. Duplicate use of one
            // refresh token is itself reuse; never retry.
            self.alert_breach(&session).await;
            return Err(SessionError::NotAllowed);
        }

        tracing::info!(
            session_id = %session.session_id,
            user_id = %session.user_id,
            "Session refresh token rotated"
        );

        Ok(RefreshedTokens {
            access_token,
            refresh_token,
            refresh_expires_at,
        })
    }

    /// Best-effort reuse alert; the delivery result is discarded so it
    /// can never change the already-decided rejection.
    async fn alert_breach(&self, session: &Session) {
        tracing::warn!(
            session_id = %session.session_id,
            user_id = %session.user_id,
            "Refresh token reuse detected"
        );

        if let Err(e) = self.notifier.notify(&session.email).await {
            tracing::warn!(error = %e, "Breach notification failed");
        }
    }
}
