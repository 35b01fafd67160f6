//! User Entity
//!
//! A registered account: unique username plus the salted password hash.
//! Created only through registration and never mutated or deleted by any
//! exposed operation.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::user_name::UserName;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    /// Username (unique, case-sensitive)
    pub username: UserName,
    /// Salted Argon2id hash in PHC string format
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}
