//! Login Use Case
//!
//! Checks a username/password pair and issues a bearer token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entity::CredentialStore;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Bearer token for subsequent requests
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    credentials: Arc<CredentialStore>,
}

impl<S> LoginUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, credentials: Arc<CredentialStore>) -> Self {
        Self {
            session_repo,
            credentials,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        if !self.credentials.verify(&input.username, &input.password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = self.session_repo.issue().await?;

        tracing::info!(
            username = %input.username,
            expires_at = %session.expires_at,
            "User logged in"
        );

        Ok(LoginOutput {
            token: session.token,
            expires_at: session.expires_at,
        })
    }
}
