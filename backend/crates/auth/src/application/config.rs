//! Application Configuration
//!
//! Configuration for the Auth application layer. Always passed in as an
//! `Arc` constructor parameter, never read from process-wide state.

use std::time::Duration;

use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Idle timeout: a session ends after this much inactivity (10 minutes)
    pub session_idle_ttl: Duration,
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "task_session".to_string(),
            session_secret: [0u8; 32],
            session_idle_ttl: Duration::from_secs(10 * 60),
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Idle TTL in milliseconds
    pub fn session_idle_ttl_ms(&self) -> i64 {
        self.session_idle_ttl.as_millis() as i64
    }

    /// Cookie attributes for the session cookie
    ///
    /// Max-Age mirrors the idle TTL, so the cookie must be re-issued
    /// whenever the server-side expiry slides (the session gate does
    /// this on every authorized request).
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            http_only: true,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age: Some(self.session_idle_ttl),
        }
    }
}
