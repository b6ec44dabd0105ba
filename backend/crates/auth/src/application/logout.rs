//! Logout Use Case
//!
//! Revokes the bearer token presented with the request.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Revoke the token; revoking an already-gone token still succeeds
    pub async fn execute(&self, token: &str) -> AuthResult<()> {
        self.session_repo.revoke(token).await?;

        tracing::info!("User logged out");
        Ok(())
    }
}
