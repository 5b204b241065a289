//! Application Configuration
//!
//! Configuration for the session application layer: signing secrets,
//! token lifetimes, and the three refresh cookie names.

use std::time::Duration;

/// Re-export cookie types from platform
pub use platform::cookie::{CookieConfig, SameSite};

/// Session application configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC secret for access tokens (32 bytes)
    pub access_secret: [u8; 32],
    /// HMAC secret for refresh tokens (32 bytes, independent of access)
    pub refresh_secret: [u8; 32],
    /// Access token TTL (short)
    pub access_ttl: Duration,
    /// Refresh token / session TTL (long)
    pub refresh_ttl: Duration,
    /// Cookie name for the token header segment
    pub cookie_header_name: String,
    /// Cookie name for the token payload segment
    pub cookie_payload_name: String,
    /// Cookie name for the token signature segment
    pub cookie_signature_name: String,
    /// Cookie path
    pub cookie_path: String,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            access_secret: [0u8; 32],
            refresh_secret: [0u8; 32],
            access_ttl: Duration::from_secs(10 * 60),           // 10 minutes
            refresh_ttl: Duration::from_secs(7 * 24 * 3600),    // 1 week
            cookie_header_name: "refresh_header".to_string(),
            cookie_payload_name: "refresh_payload".to_string(),
            cookie_signature_name: "refresh_signature".to_string(),
            cookie_path: "/".to_string(),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl SessionConfig {
    /// Create config with random signing secrets (for development)
    pub fn with_random_secrets() -> Self {
        let mut access_secret = [0u8; 32];
        let mut refresh_secret = [0u8; 32];
        access_secret.copy_from_slice(&platform::crypto::random_bytes(32));
        refresh_secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            access_secret,
            refresh_secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secrets()
        }
    }

    /// The three segment cookie names, in token order
    pub fn cookie_names(&self) -> [&str; 3] {
        [
            &self.cookie_header_name,
            &self.cookie_payload_name,
            &self.cookie_signature_name,
        ]
    }

    /// Build the cookie configuration for one segment cookie
    pub fn segment_cookie(&self, name: &str) -> CookieConfig {
        CookieConfig {
            name: name.to_string(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: self.cookie_path.clone(),
            max_age_secs: Some(self.refresh_ttl.as_secs() as i64),
        }
    }

    /// Cookie configurations for all three segments, in token order
    pub fn segment_cookies(&self) -> [CookieConfig; 3] {
        self.cookie_names().map(|name| self.segment_cookie(name))
    }
}
