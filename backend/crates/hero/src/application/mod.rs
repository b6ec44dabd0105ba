//! Application Layer
//!
//! Use cases for the hero catalogue.

pub mod create_hero;
pub mod delete_hero;
pub mod get_hero;
pub mod list_heroes;
pub mod update_hero;

// Re-exports
pub use create_hero::{CreateHeroInput, CreateHeroUseCase};
pub use delete_hero::DeleteHeroUseCase;
pub use get_hero::GetHeroUseCase;
pub use list_heroes::ListHeroesUseCase;
pub use update_hero::{UpdateHeroInput, UpdateHeroUseCase};
