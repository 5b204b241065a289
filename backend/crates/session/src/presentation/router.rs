//! Session Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::domain::repository::{BreachNotifier, SessionStore};
use crate::infra::postgres::PgSessionStore;
use crate::infra::smtp::SmtpBreachNotifier;
use crate::presentation::handlers::{self, SessionAppState};

/// Create the session router with the PostgreSQL store and SMTP notifier
pub fn session_router(
    store: PgSessionStore,
    notifier: SmtpBreachNotifier,
    config: SessionConfig,
) -> Router {
    session_router_generic(store, notifier, config)
}

/// Create a generic session router for any store/notifier implementation
pub fn session_router_generic<S, N>(store: S, notifier: N, config: SessionConfig) -> Router
where
    S: SessionStore + Clone + Send + Sync + 'static,
    N: BreachNotifier + Clone + Send + Sync + 'static,
{
    let state = SessionAppState {
        store: Arc::new(store),
        notifier: Arc::new(notifier),
        config: Arc::new(config),
    };

    Router::new()
        .route("/refresh", post(handlers::refresh::<S, N>))
        .route("/logout", post(handlers::logout::<S, N>))
        .with_state(state)
}
