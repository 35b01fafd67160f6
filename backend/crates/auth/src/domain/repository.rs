//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure
//! layer. Both stores are injected as constructor parameters so use cases
//! can be exercised against in-memory doubles.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;
use platform::password::HashedPassword;
use uuid::Uuid;

/// Credential store trait
///
/// Callers pre-check uniqueness via `find_by_username`, but `insert` must
/// still translate a unique-constraint violation into
/// [`crate::error::AuthError::UsernameTaken`]: the constraint, not the
/// pre-check, is the source of truth under concurrent registrations.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by exact (case-sensitive) username
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Insert a new user, returning the stored row with its assigned id
    async fn insert(
        &self,
        username: &UserName,
        password_hash: &HashedPassword,
    ) -> AuthResult<User>;
}

/// Session store trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Persist a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a live (non-expired) session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<Session>>;

    /// Update session activity/expiry
    async fn update(&self, session: &Session) -> AuthResult<()>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions, returning the number removed
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
