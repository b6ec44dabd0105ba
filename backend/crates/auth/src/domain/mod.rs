//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{Credential, CredentialStore, SessionToken};
pub use repository::SessionRepository;
