//! Logout Use Case
//!
//! Revokes the caller's session row. Deletion problems are logged and
//! swallowed: logout must always end with the transport clearing the
//! refresh cookies, whatever the store said.

use std::sync::Arc;

use crate::domain::repository::SessionStore;
use crate::domain::value_object::user_id::UserId;
use crate::error::SessionResult;

/// Logout input
#[derive(Debug, Clone)]
pub struct LogoutInput {
    pub session_id: String,
    /// Caller identity from the bearer access token
    pub claimed_user_id: UserId,
}

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionStore,
{
    store: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Delete the session if it belongs to the caller.
    ///
    /// Always returns `Ok(())`; the cookie clear that follows must not
    /// depend on the store.
    pub async fn execute(&self, input: LogoutInput) -> SessionResult<()> {
        let outcome = async {
            let Some(session) = self.store.find(&input.session_id).await? else {
                return Ok(false);
            };

            if !session.is_owned_by(&input.claimed_user_id) {
                tracing::warn!(
                    session_id = %input.session_id,
                    "Logout attempted on a session owned by another user"
                );
                return Ok(false);
            }

            self.store.remove(&input.session_id).await?;
            Ok::<bool, crate::error::SessionError>(true)
        }
        .await;

        match outcome {
            Ok(true) => {
                tracing::info!(session_id = %input.session_id, "Session revoked");
            }
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Logout cleanup failed, clearing cookies anyway");
            }
        }

        Ok(())
    }
}
