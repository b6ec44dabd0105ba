//! Auth Router

use axum::{Router, middleware, routing::post};
use std::sync::Arc;

use crate::domain::entity::CredentialStore;
use crate::domain::repository::SessionRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_bearer_token};

/// Create the Auth router
///
/// `sessions` is a shared handle; pass clones of the same registry to the
/// hero router's gate and to the sweeper.
pub fn auth_router<S>(sessions: S, credentials: CredentialStore) -> Router
where
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthMiddlewareState::new(sessions.clone());

    let state = AuthAppState {
        sessions: Arc::new(sessions),
        credentials: Arc::new(credentials),
    };

    let public = Router::new().route("/login", post(handlers::login::<S>));

    let protected = Router::new()
        .route("/logout", post(handlers::logout::<S>))
        .route_layer(middleware::from_fn_with_state(gate, require_bearer_token::<S>));

    public.merge(protected).with_state(state)
}
