//! In-Memory Session Registry
//!
//! Process-local token map guarded by a single read/write lock.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::domain::entity::SessionToken;
use crate::domain::entity::session_token::is_expired_at;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Token -> expiry map shared by all clones of the registry
#[derive(Clone)]
pub struct InMemorySessionRegistry {
    tokens: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
    ttl: Duration,
}

impl InMemorySessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Number of stored tokens, expired or not
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

impl SessionRepository for InMemorySessionRegistry {
    async fn issue(&self) -> AuthResult<SessionToken> {
        let session = SessionToken::generate(self.ttl);

        self.tokens
            .write()
            .await
            .insert(session.token.clone(), session.expires_at);

        Ok(session)
    }

    async fn validate(&self, token: &str) -> AuthResult<bool> {
        let tokens = self.tokens.read().await;

        Ok(tokens
            .get(token)
            .is_some_and(|expires_at| !is_expired_at(*expires_at, Utc::now())))
    }

    async fn revoke(&self, token: &str) -> AuthResult<()> {
        self.tokens.write().await.remove(token);
        Ok(())
    }

    async fn sweep(&self) -> AuthResult<usize> {
        let now = Utc::now();
        let mut tokens = self.tokens.write().await;

        let before = tokens.len();
        tokens.retain(|_, expires_at| !is_expired_at(*expires_at, now));

        Ok(before - tokens.len())
    }
}
