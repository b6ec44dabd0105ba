//! Infrastructure Layer
//!
//! Repository implementations.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryHeroRepository;
pub use postgres::{MIGRATOR, PgHeroRepository};
