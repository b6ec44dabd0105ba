//! Repository Traits
//!
//! Interfaces for session persistence. Implementation is in infrastructure layer.

use crate::domain::entity::SessionToken;
use crate::error::AuthResult;

/// Session registry trait
///
/// Reads (`validate`) and writes (`issue`, `revoke`, `sweep`) may run
/// concurrently from many request tasks plus the background sweep.
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Generate, store and return a new token
    async fn issue(&self) -> AuthResult<SessionToken>;

    /// Whether the token is known and not yet expired
    async fn validate(&self, token: &str) -> AuthResult<bool>;

    /// Remove a token; removing an unknown token is not an error
    async fn revoke(&self, token: &str) -> AuthResult<()>;

    /// Remove every expired token, returning how many were removed
    async fn sweep(&self) -> AuthResult<usize>;
}
