//! Password Strength Checking, Hashing and Verification
//!
//! - Strength policy: at least 8 characters, with at least one ASCII
//!   lowercase letter, one uppercase letter and one digit. Enforced at
//!   registration only; login verifies whatever hash is stored.
//! - Argon2id hashing with a per-password random salt (PHC string format)
//! - Constant-time verification
//! - Zeroization of clear text passwords on drop

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Sanity ceiling on password length (Argon2 input, not a policy statement)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password has no lowercase letter
    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,

    /// Password has no uppercase letter
    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    /// Password has no digit
    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Strength Policy
// ============================================================================

/// Check a password against the registration strength policy
///
/// Pure and deterministic. The policy requires:
/// - at least [`MIN_PASSWORD_LENGTH`] characters (Unicode code points)
/// - at least one ASCII lowercase letter
/// - at least one ASCII uppercase letter
/// - at least one ASCII digit
///
/// There is no character-set restriction beyond requiring those three
/// classes; any other characters are allowed.
pub fn validate_strength(password: &str) -> Result<(), PasswordPolicyError> {
    let char_count = password.chars().count();

    if char_count < MIN_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: MIN_PASSWORD_LENGTH,
            actual: char_count,
        });
    }

    if char_count > MAX_PASSWORD_LENGTH {
        return Err(PasswordPolicyError::TooLong {
            max: MAX_PASSWORD_LENGTH,
            actual: char_count,
        });
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(PasswordPolicyError::MissingLowercase);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(PasswordPolicyError::MissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordPolicyError::MissingDigit);
    }

    Ok(())
}

/// Convenience boolean form of [`validate_strength`]
pub fn meets_policy(password: &str) -> bool {
    validate_strength(password).is_ok()
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Wraps user input so password data is securely erased from memory when
/// the value is dropped. Construction does NOT apply the strength policy;
/// login has to accept whatever the user registered with, so callers that
/// need the policy run [`validate_strength`] first.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap raw user input
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// Generates a fresh random 128-bit salt per call, so hashing the same
    /// password twice produces different PHC strings.
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        // Default parameters are the OWASP-recommended Argon2id settings
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string embeds the algorithm identifier, parameters, salt and
/// digest, so verification needs no out-of-band data.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // Validate it's a valid PHC string
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Argon2 performs a constant-time comparison internally, so this does
    /// not leak timing information about the stored digest.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_valid_password() {
        assert!(meets_policy("Abcdef12"));
        assert!(meets_policy("Passw0rd"));
        // No charset restriction beyond the three required classes
        assert!(meets_policy("Abcdef12!@# あ"));
    }

    #[test]
    fn test_policy_rejects_short_password() {
        let result = validate_strength("Abc123");
        assert!(matches!(result, Err(PasswordPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_policy_rejects_missing_classes() {
        assert!(matches!(
            validate_strength("abcdef12"),
            Err(PasswordPolicyError::MissingUppercase)
        ));
        assert!(matches!(
            validate_strength("ABCDEF12"),
            Err(PasswordPolicyError::MissingLowercase)
        ));
        assert!(matches!(
            validate_strength("Abcdefgh"),
            Err(PasswordPolicyError::MissingDigit)
        ));
    }

    #[test]
    fn test_policy_rejects_absurd_length() {
        let long_password = format!("Aa1{}", "x".repeat(MAX_PASSWORD_LENGTH));
        assert!(matches!(
            validate_strength(&long_password),
            Err(PasswordPolicyError::TooLong { .. })
        ));
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123".to_string());
        let hashed = password.hash().unwrap();

        // Correct password should verify
        assert!(hashed.verify(&password));

        // Wrong password should not verify
        let wrong_password = ClearTextPassword::new("WrongPassword123".to_string());
        assert!(!hashed.verify(&wrong_password));
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = ClearTextPassword::new("TestPassword123".to_string());
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();

        // Same password, different salt, different PHC string
        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.verify(&password));
        assert!(second.verify(&password));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("TestPassword123".to_string());
        let hashed = password.hash().unwrap();

        let phc_string = hashed.as_phc_string().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
