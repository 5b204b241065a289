//! Claimed-Identity Extraction
//!
//! Resolves the caller's user id from the `Authorization: Bearer` access
//! token. The signature must check out, but expiry is deliberately
//! ignored: the whole point of the refresh call is recovering from an
//! expired access token, so the claim is an identity input only, never a
//! live authorization check.

use axum::http::{HeaderMap, header};

use crate::application::config::SessionConfig;
use crate::application::token::verify_token;
use crate::domain::value_object::user_id::UserId;
use crate::error::{SessionError, SessionResult};

/// Extract the claimed user id from the bearer access token
///
/// Missing or forged bearer tokens yield `Unauthenticated`.
pub fn claimed_user_id(headers: &HeaderMap, config: &SessionConfig) -> SessionResult<UserId> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(SessionError::Unauthenticated)?
        .to_str()
        .map_err(|_| SessionError::Unauthenticated)?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or(SessionError::Unauthenticated)?;

    // Valid or expired both carry a trustworthy subject; only a bad
    // signature is rejected.
    let verified =
        verify_token(token, &config.access_secret).map_err(|_| SessionError::Unauthenticated)?;

    verified
        .claims()
        .subject()
        .map_err(|_| SessionError::Unauthenticated)
}
