//! Establish Session Use Case
//!
//! Integration seam for the (external) login flow: given an already
//! authenticated user, mint the session row plus the initial token pair.
//! No HTTP route creates sessions; the login service calls this as a
//! library.

use std::sync::Arc;

use chrono::Duration;

use crate::application::config::SessionConfig;
use crate::application::token::sign_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionStore;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::SessionResult;

/// Establish session input
#[derive(Debug, Clone)]
pub struct EstablishSessionInput {
    /// Authenticated user (verified by the caller)
    pub user_id: UserId,
    /// Breach notification target for this session
    pub email: Email,
}

/// Establish session output: everything the transport needs
#[derive(Debug, Clone)]
pub struct EstablishedSession {
    pub session_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub refresh_expires_at: chrono::DateTime<chrono::Utc>,
}

/// Establish session use case
pub struct EstablishSessionUseCase<S>
where
    S: SessionStore,
{
    store: Arc<S>,
    config: Arc<SessionConfig>,
}

impl<S> EstablishSessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(store: Arc<S>, config: Arc<SessionConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: EstablishSessionInput) -> SessionResult<EstablishedSession> {
        let access_token = sign_token(
            &input.user_id,
            &self.config.access_secret,
            self.config.access_ttl,
        )?;
        let refresh_token = sign_token(
            &input.user_id,
            &self.config.refresh_secret,
            self.config.refresh_ttl,
        )?;

        let ttl = Duration::seconds(self.config.refresh_ttl.as_secs() as i64);
        let session = Session::new(input.user_id, input.email, refresh_token.clone(), ttl);

        self.store.insert(&session).await?;

        tracing::info!(
            session_id = %session.session_id,
            user_id = %session.user_id,
            "Session established"
        );

        Ok(EstablishedSession {
            session_id: session.session_id,
            access_token,
            refresh_token,
            refresh_expires_at: session.expires_at,
        })
    }
}
