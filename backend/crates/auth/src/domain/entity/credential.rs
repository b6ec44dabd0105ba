//! Credential Entity
//!
//! Static username/password pairs, loaded once at startup and read-only
//! afterwards. Comparison is exact and case-sensitive; nothing is hashed.

use platform::crypto::constant_time_eq;
use serde::Deserialize;
use std::fmt;

/// A single username/password pair
#[derive(Clone, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact match on both fields
    pub fn matches(&self, username: &str, password: &str) -> bool {
        // Evaluate both sides so a username hit does not short-circuit
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Read-only set of accepted credentials
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: Vec<Credential>,
}

impl CredentialStore {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// True if any entry matches the pair exactly
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.entries
            .iter()
            .fold(false, |found, entry| found | entry.matches(username, password))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
