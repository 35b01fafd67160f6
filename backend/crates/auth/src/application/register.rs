//! Register Use Case
//!
//! Creates a new user account. No session is established; the user logs
//! in separately.

use std::sync::Arc;

use platform::password::{ClearTextPassword, validate_strength};

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};
use kernel::id::UserId;

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
    pub username: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let username = UserName::new(&input.username)
            .map_err(|e| AuthError::InvalidUserName(e.to_string()))?;

        // Strength policy applies at registration only
        validate_strength(&input.password).map_err(|_| AuthError::WeakPassword)?;

        // Friendly pre-check; the unique constraint backstops it under
        // concurrent registrations (infra maps 23505 to UsernameTaken).
        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(AuthError::UsernameTaken);
        }

        let password = ClearTextPassword::new(input.password);
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = self.user_repo.insert(&username, &password_hash).await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.id,
            username: user.username.into_inner(),
        })
    }
}
