//! Hero Catalogue Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Hero entity, attribute validation, repository trait
//! - `application/` - CRUD use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Reads are public. Mutations sit behind the bearer-token gate from the
//! `auth` crate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::Hero;
pub use domain::repository::HeroRepository;
pub use domain::value_object::HeroAttributes;
pub use error::{HeroError, HeroResult};
pub use infra::memory::InMemoryHeroRepository;
pub use infra::postgres::{MIGRATOR, PgHeroRepository};
pub use presentation::router::hero_router;

pub use kernel::id::HeroId;
