//! Session Token Entity
//!
//! An opaque bearer token and the instant it stops being valid.
//! Tokens carry no identity: the registry only answers "is this live".

use chrono::{DateTime, Duration, Utc};
use platform::crypto::random_token;

/// Issued session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    /// Opaque random value sent back as `Bearer <token>`
    pub token: String,
    /// Absolute expiry
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Generate a fresh random token valid for `ttl`
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn generate(ttl: Duration) -> Self {
        Self {
            token: random_token(),
            expires_at: Utc::now() + ttl,
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        is_expired_at(self.expires_at, Utc::now())
    }
}

/// Expiry rule shared by validation and the sweep
///
/// A token is dead from its expiry instant onwards.
pub fn is_expired_at(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now >= expires_at
}
