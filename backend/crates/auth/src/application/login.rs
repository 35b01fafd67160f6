//! Login Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub session_token: String,
    pub user_id: UserId,
    pub username: String,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Input that cannot be a stored username is the same as an
        // unknown user
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        // No strength policy at login; verify against whatever was stored
        let password = ClearTextPassword::new(input.password);
        if !user.password_hash.verify(&password) {
            return Err(AuthError::InvalidPassword);
        }

        let idle_ttl = chrono::Duration::from_std(self.config.session_idle_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?;

        let session = Session::new(user.id, user.username.as_str().to_string(), idle_ttl);
        self.session_repo.create(&session).await?;

        let session_token = token::issue(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %user.id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token,
            user_id: user.id,
            username: user.username.into_inner(),
        })
    }
}
