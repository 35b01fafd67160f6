//! Session Middleware
//!
//! Gates protected routes: resolves the session cookie to a live session
//! and inserts [`CurrentUser`] into request extensions, or rejects with
//! 401 before the handler runs.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{HeaderValue, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use kernel::id::UserId;

use crate::application::check_session::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Authenticated user attached to the request by [`require_session`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
}

/// State captured by the session-gate middleware closure
#[derive(Clone)]
pub struct AuthMiddlewareState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub session_repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> AuthMiddlewareState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }
}

/// Require a live session for the request
///
/// On success the session's idle expiry is slid and [`CurrentUser`] is
/// available to handlers via `Extension`. A missing cookie, a bad
/// signature, an unknown session id, and an expired session all get the
/// same 401 response.
///
/// The cookie's Max-Age mirrors the idle TTL, so it is re-issued on
/// every gated response; otherwise the browser would drop the cookie
/// 10 minutes after login even while the server session stays live.
pub async fn require_session<S>(
    state: AuthMiddlewareState<S>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(
        request.headers(),
        &state.config.session_cookie_name,
    )
    .ok_or_else(|| AuthError::SessionInvalid.into_response())?;

    let use_case = CheckSessionUseCase::new(state.session_repo.clone(), state.config.clone());

    let session = use_case
        .get_session(&token)
        .await
        .map_err(IntoResponse::into_response)?;

    request.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
        username: session.username,
    });

    let mut response = next.run(request).await;

    let refreshed = state.config.session_cookie().build_set_cookie(&token);
    if let Ok(value) = HeaderValue::from_str(&refreshed) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}
