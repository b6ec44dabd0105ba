//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Lifetime of an issued bearer token (24 hours)
    pub token_ttl: Duration,
    /// Period of the expired-token sweep (30 minutes)
    pub sweep_interval: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::from_secs(24 * 3600),
            sweep_interval: Duration::from_secs(30 * 60),
        }
    }
}

impl AuthConfig {
    /// Token TTL as a chrono duration for expiry arithmetic
    pub fn token_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.token_ttl).unwrap_or(chrono::Duration::MAX)
    }
}
