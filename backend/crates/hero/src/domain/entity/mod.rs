//! Domain Entities

pub mod hero;

pub use hero::{DEFAULT_HEROES, Hero};
