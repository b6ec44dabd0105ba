//! Hero Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use auth::{AuthMiddlewareState, SessionRepository, require_bearer_token};

use crate::domain::repository::HeroRepository;
use crate::presentation::handlers::{self, HeroAppState};

/// Create the Hero router
///
/// Reads are public; create, update and delete require a live bearer token
/// from `sessions`.
pub fn hero_router<R, S>(repo: R, sessions: S) -> Router
where
    R: HeroRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let gate = AuthMiddlewareState::new(sessions);

    let state = HeroAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/heroes", get(handlers::list_heroes::<R>))
        .route("/heroes/{id}", get(handlers::get_hero::<R>));

    let protected = Router::new()
        .route("/heroes", post(handlers::create_hero::<R>))
        .route(
            "/heroes/{id}",
            put(handlers::update_hero::<R>).delete(handlers::delete_hero::<R>),
        )
        .route_layer(middleware::from_fn_with_state(gate, require_bearer_token::<S>));

    public.merge(protected).with_state(state)
}
