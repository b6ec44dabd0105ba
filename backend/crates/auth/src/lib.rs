//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credentials, session tokens, registry trait
//! - `application/` - Login, logout, session check and sweep use cases
//! - `infra/` - In-memory session registry, YAML credential loader
//! - `presentation/` - HTTP handlers, DTOs, bearer middleware, router
//!
//! ## Security Model
//! - Credentials are a fixed list loaded once at startup
//! - Tokens are 32 random bytes, base64url encoded, opaque to clients
//! - Tokens live 24 hours; expired ones are rejected immediately and purged
//!   by a periodic sweep
//! - Logging out revokes the presented token only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::sweep_sessions::SweepSessionsUseCase;
pub use domain::entity::{Credential, CredentialStore};
pub use domain::repository::SessionRepository;
pub use error::{AuthError, AuthResult};
pub use infra::{InMemorySessionRegistry, load_credentials, parse_credentials};
pub use presentation::middleware::{AuthMiddlewareState, BearerToken, require_bearer_token};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

#[cfg(test)]
mod tests;
