//! User Name Value Object
//!
//! Usernames are case-sensitive and matched exactly: `Alice` and `alice`
//! are different accounts. Uniqueness lives in the database constraint,
//! not here; this type only guards against unusable input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a username (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// Error returned when username validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// Username is empty after trimming
    Empty,

    /// Username is too long (maximum: USER_NAME_MAX_LENGTH)
    TooLong { length: usize, max: usize },

    /// Username contains a control character
    InvalidCharacter { char: char, position: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Username cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Username is too long ({length} chars, maximum {max})")
            }
            Self::InvalidCharacter { char, position } => {
                write!(f, "Invalid control character at position {position}: {char:?}")
            }
        }
    }
}

impl std::error::Error for UserNameError {}

/// Validated username
///
/// # Invariants
/// - Non-empty after trimming surrounding whitespace
/// - At most [`USER_NAME_MAX_LENGTH`] characters
/// - No control characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName from raw input
    ///
    /// Trims surrounding whitespace, preserves case.
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let name = input.as_ref().trim().to_string();

        if name.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = name.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if let Some((position, char)) = name.chars().enumerate().find(|(_, c)| c.is_control()) {
            return Err(UserNameError::InvalidCharacter { char, position });
        }

        Ok(Self(name))
    }

    /// Get the username as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Create from a database value (assumed already validated at insert)
    pub fn from_db(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}
