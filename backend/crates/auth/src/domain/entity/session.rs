//! Session Entity
//!
//! Server-side record of an authenticated session. The client only ever
//! holds an opaque signed token referencing `session_id`; the identity
//! payload (`user_id`, `username`) never leaves the server.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use uuid::Uuid;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Owning user
    pub user_id: UserId,
    /// Username at login time
    pub username: String,
    /// Idle expiry (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session expiring `idle_ttl` from now
    ///
    /// The TTL is provided by the application layer (config), not
    /// hard-coded here.
    pub fn new(user_id: UserId, username: String, idle_ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            username,
            expires_at_ms: (now + idle_ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if the session has passed its idle expiry
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Record activity and slide the idle expiry forward
    ///
    /// The timeout is idle-based: every authorized request restarts the
    /// countdown, so only `idle_ttl` of inactivity ends the session.
    pub fn touch(&mut self, idle_ttl: Duration) {
        let now = Utc::now();
        self.last_activity_at = now;
        self.expires_at_ms = (now + idle_ttl).timestamp_millis();
    }

    /// Remaining time until idle expiry
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }
}
