//! Hero API Application
//!
//! Assembles the auth and hero routers under `/api` with CORS and request
//! tracing. The binary in `main.rs` wires configuration, storage and the
//! session sweeper around [`build_app`].

pub mod config;

use auth::{CredentialStore, SessionRepository, auth_router};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use hero::{HeroRepository, hero_router};
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// Route table, logged at startup
pub const ENDPOINTS: [&str; 7] = [
    "POST   /api/login",
    "POST   /api/logout        (auth)",
    "GET    /api/heroes",
    "GET    /api/heroes/{id}",
    "POST   /api/heroes        (auth)",
    "PUT    /api/heroes/{id}   (auth)",
    "DELETE /api/heroes/{id}   (auth)",
];

/// Build the full HTTP application
///
/// `sessions` is shared by login/logout and the bearer gate on hero
/// mutations, so it must be a cheap handle onto one registry.
pub fn build_app<R, S>(heroes: R, sessions: S, credentials: CredentialStore) -> Router
where
    R: HeroRepository + Clone + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let api = auth_router(sessions.clone(), credentials).merge(hero_router(heroes, sessions));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
}

/// Any origin; every OPTIONS request is answered here with an empty 200
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ]))
}
