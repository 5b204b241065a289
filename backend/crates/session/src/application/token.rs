//! Token Codec
//!
//! Signs and verifies the compact HS256 tokens used for both access and
//! refresh credentials. Verification distinguishes three cases:
//!
//! - structurally invalid / bad signature: untrustworthy input, no claims
//! - expired but correctly signed: claims are still recoverable, which is
//!   what lets an expired token enter the refresh grace path
//! - valid and unexpired
//!
//! Expiry is checked manually after signature verification so that the
//! claims of an expired token remain available to the caller.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;
use crate::error::{SessionError, SessionResult};

/// Claims embedded in every signed token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject - the owning user's id
    pub sub: String,
    /// Issued-at time (UTC Unix timestamp)
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp)
    pub exp: i64,
    /// Unique token identifier, so back-to-back mints never collide
    pub jti: String,
}

impl TokenClaims {
    /// Parse the subject claim into a typed user id
    ///
    /// A correctly signed token always carries a UUID subject; anything
    /// else is treated as structurally invalid.
    pub fn subject(&self) -> SessionResult<UserId> {
        let uuid: Uuid = self.sub.parse().map_err(|_| SessionError::TokenInvalid)?;
        Ok(UserId::from_uuid(uuid))
    }
}

/// Outcome of verifying a well-signed token
#[derive(Debug, Clone)]
pub enum VerifiedToken {
    /// Signature and expiry both check out
    Valid(TokenClaims),
    /// Correctly signed but past its expiry; claims remain usable
    Expired(TokenClaims),
}

impl VerifiedToken {
    pub fn claims(&self) -> &TokenClaims {
        match self {
            VerifiedToken::Valid(claims) | VerifiedToken::Expired(claims) => claims,
        }
    }
}

/// Sign a token for `user_id` with the given secret and lifetime
pub fn sign_token(
    user_id: &UserId,
    secret: &[u8],
    ttl: std::time::Duration,
) -> SessionResult<String> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + ttl.as_secs() as i64,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| SessionError::Internal(format!("Token signing failed: {e}")))
}

/// Verify a token's signature, then classify it by expiry
///
/// Returns `SessionError::TokenInvalid` for anything that cannot be
/// parsed or whose signature does not match; such input must cause no
/// further work.
pub fn verify_token(token: &str, secret: &[u8]) -> SessionResult<VerifiedToken> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is classified manually below so expired claims stay readable
    validation.validate_exp = false;

    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret), &validation)
        .map_err(|_| SessionError::TokenInvalid)?;

    if data.claims.exp <= Utc::now().timestamp() {
        Ok(VerifiedToken::Expired(data.claims))
    } else {
        Ok(VerifiedToken::Valid(data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";
    const OTHER_SECRET: &[u8] = b"fedcba9876543210fedcba9876543210";

    #[test]
    fn test_sign_and_verify_valid() {
        let user_id = UserId::new();
        let token = sign_token(&user_id, SECRET, Duration::from_secs(600)).unwrap();

        match verify_token(&token, SECRET).unwrap() {
            VerifiedToken::Valid(claims) => {
                assert_eq!(claims.subject().unwrap(), user_id);
            }
            VerifiedToken::Expired(_) => panic!("fresh token reported expired"),
        }
    }

    #[test]
    fn test_expired_token_keeps_claims() {
        let user_id = UserId::new();
        let token = sign_token(&user_id, SECRET, Duration::from_secs(0)).unwrap();

        match verify_token(&token, SECRET).unwrap() {
            VerifiedToken::Expired(claims) => {
                assert_eq!(claims.subject().unwrap(), user_id);
            }
            VerifiedToken::Valid(_) => panic!("zero-ttl token reported valid"),
        }
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = sign_token(&UserId::new(), SECRET, Duration::from_secs(600)).unwrap();
        assert!(matches!(
            verify_token(&token, OTHER_SECRET),
            Err(SessionError::TokenInvalid)
        ));
    }

    #[test]
    fn test_garbage_is_invalid() {
        for garbage in ["", "abc", "a.b", "a.b.c", "a.b.c.d"] {
            assert!(matches!(
                verify_token(garbage, SECRET),
                Err(SessionError::TokenInvalid)
            ));
        }
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let token = sign_token(&UserId::new(), SECRET, Duration::from_secs(600)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = "eyJzdWIiOiJmb3JnZWQifQ";
        parts[1] = forged_payload;
        let tampered = parts.join(".");
        assert!(matches!(
            verify_token(&tampered, SECRET),
            Err(SessionError::TokenInvalid)
        ));
    }

    #[test]
    fn test_tokens_are_unique_per_mint() {
        let user_id = UserId::new();
        let a = sign_token(&user_id, SECRET, Duration::from_secs(600)).unwrap();
        let b = sign_token(&user_id, SECRET, Duration::from_secs(600)).unwrap();
        assert_ne!(a, b); // distinct jti even within one clock second
    }
}
