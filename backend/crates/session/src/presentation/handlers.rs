//! HTTP Handlers
//!
//! Maps requests onto the use cases and the typed outcomes back onto
//! responses. Cookie side effects live here: a successful refresh
//! rewrites the three segment cookies, a reuse rejection or a logout
//! expires them.

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::cookie::{delete_cookie_header, extract_cookie, set_cookie_header};

use crate::application::config::SessionConfig;
use crate::application::{LogoutInput, LogoutUseCase, RefreshInput, RefreshUseCase};
use crate::domain::repository::{BreachNotifier, SessionStore};
use crate::domain::value_object::cookie_set::CookieSet;
use crate::error::SessionError;
use crate::presentation::dto::{LogoutRequest, RefreshRequest, RefreshResponse};
use crate::presentation::identity;

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState<S, N>
where
    S: SessionStore + Clone + Send + Sync + 'static,
    N: BreachNotifier + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub notifier: Arc<N>,
    pub config: Arc<SessionConfig>,
}

/// Read the three segment cookies from the request into a `CookieSet`
pub fn read_cookie_set(headers: &HeaderMap, config: &SessionConfig) -> CookieSet {
    CookieSet::from_parts(
        extract_cookie(headers, &config.cookie_header_name),
        extract_cookie(headers, &config.cookie_payload_name),
        extract_cookie(headers, &config.cookie_signature_name),
    )
}

/// Append three Set-Cookie headers carrying the refresh token segments
fn append_refresh_cookies(
    headers: &mut HeaderMap,
    config: &SessionConfig,
    refresh_token: &str,
) -> Result<(), SessionError> {
    let Some((header_seg, payload_seg, signature_seg)) = CookieSet::split(refresh_token) else {
        return Err(SessionError::Internal(
            "Minted refresh token does not have three segments".to_string(),
        ));
    };

    let segments = [header_seg, payload_seg, signature_seg];
    for (cookie, value) in config.segment_cookies().iter().zip(segments) {
        headers.append(header::SET_COOKIE, set_cookie_header(cookie, value));
    }

    Ok(())
}

/// Append three Set-Cookie headers that expire the segment cookies
fn append_clear_cookies(headers: &mut HeaderMap, config: &SessionConfig) {
    for cookie in config.segment_cookies() {
        headers.append(header::SET_COOKIE, delete_cookie_header(&cookie));
    }
}

// ============================================================================
// Refresh
// ============================================================================

/// POST /api/session/refresh
pub async fn refresh<S, N>(
    State(state): State<SessionAppState<S, N>>,
    headers: HeaderMap,
    Json(req): Json<RefreshRequest>,
) -> Response
where
    S: SessionStore + Clone + Send + Sync + 'static,
    N: BreachNotifier + Clone + Send + Sync + 'static,
{
    let claimed_user_id = match identity::claimed_user_id(&headers, &state.config) {
        Ok(user_id) => user_id,
        Err(e) => return e.into_response(),
    };

    let cookies = read_cookie_set(&headers, &state.config);

    let use_case = RefreshUseCase::new(
        state.store.clone(),
        state.notifier.clone(),
        state.config.clone(),
    );

    let input = RefreshInput {
        session_id: req.session_id,
        cookies,
        claimed_user_id,
    };

    match use_case.execute(input).await {
        Ok(tokens) => {
            let mut response = (
                StatusCode::OK,
                Json(RefreshResponse::success(tokens.access_token)),
            )
                .into_response();

            if let Err(e) =
                append_refresh_cookies(response.headers_mut(), &state.config, &tokens.refresh_token)
            {
                return e.into_response();
            }

            response
        }
        Err(err @ SessionError::NotAllowed) => {
            // Breach path: the session is dead, take the cookies with it
            let mut response = err.into_response();
            append_clear_cookies(response.headers_mut(), &state.config);
            response
        }
        Err(err) => err.into_response(),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/session/logout
///
/// Revokes the caller's session when the bearer identity resolves and
/// matches; either way the segment cookies are expired.
pub async fn logout<S, N>(
    State(state): State<SessionAppState<S, N>>,
    headers: HeaderMap,
    Json(req): Json<LogoutRequest>,
) -> Response
where
    S: SessionStore + Clone + Send + Sync + 'static,
    N: BreachNotifier + Clone + Send + Sync + 'static,
{
    if let Ok(claimed_user_id) = identity::claimed_user_id(&headers, &state.config) {
        let use_case = LogoutUseCase::new(state.store.clone());
        // Ignore errors - just clear the cookies
        let _ = use_case
            .execute(LogoutInput {
                session_id: req.session_id,
                claimed_user_id,
            })
            .await;
    }

    let mut response = StatusCode::NO_CONTENT.into_response();
    append_clear_cookies(response.headers_mut(), &state.config);
    response
}
