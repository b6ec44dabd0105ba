//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::domain::repository::SessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub sessions: Arc<S>,
}

impl<S> AuthMiddlewareState<S>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(sessions: S) -> Self {
        Self {
            sessions: Arc::new(sessions),
        }
    }
}

/// Validated bearer token, stored in request extensions for handlers
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Middleware that requires a live bearer token
///
/// Missing header, wrong scheme, empty token and unknown/expired token
/// each produce a 401 with their own message.
pub async fn require_bearer_token<S>(
    State(state): State<AuthMiddlewareState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(req.headers())?.to_string();

    CheckSessionUseCase::new(state.sessions.clone())
        .require(&token)
        .await?;

    req.extensions_mut().insert(BearerToken(token));

    Ok(next.run(req).await)
}
