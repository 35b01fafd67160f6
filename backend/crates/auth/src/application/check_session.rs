//! Check Session Use Case
//!
//! Verifies a session token and loads the session record. This is the
//! whole of the session gate's logic; the middleware only adapts it to
//! HTTP.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Get the live session for a token, sliding its idle expiry
    ///
    /// Expiry is enforced by the store (expired rows are filtered out and
    /// deleted); this method does no clock math of its own beyond the
    /// belt-and-braces `is_expired` check on the loaded row.
    pub async fn get_session(&self, session_token: &str) -> AuthResult<Session> {
        let session_id = token::verify(&self.config.session_secret, session_token)
            .ok_or(AuthError::SessionInvalid)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.session_repo.delete(session_id).await?;
            return Err(AuthError::SessionInvalid);
        }

        let idle_ttl = chrono::Duration::from_std(self.config.session_idle_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let mut session = session;
        session.touch(idle_ttl);

        // Persist the slid expiry in the background; a lost update only
        // shortens the idle window, never extends it
        let session_clone = session.clone();
        let repo = self.session_repo.clone();
        tokio::spawn(async move {
            if let Err(e) = repo.update(&session_clone).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session)
    }
}
