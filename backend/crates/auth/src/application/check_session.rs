//! Check Session Use Case
//!
//! Verifies a bearer token against the session registry.

use std::sync::Arc;

use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    /// Just check if the token is valid (returns bool)
    pub async fn is_valid(&self, token: &str) -> AuthResult<bool> {
        self.session_repo.validate(token).await
    }

    /// Fail with `InvalidToken` unless the token is live
    pub async fn require(&self, token: &str) -> AuthResult<()> {
        if self.is_valid(token).await? {
            Ok(())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}
