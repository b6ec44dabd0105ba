//! Repository Traits
//!
//! Interfaces for hero persistence. Implementations are in infrastructure layer.

use kernel::id::HeroId;

use crate::domain::entity::Hero;
use crate::domain::value_object::HeroAttributes;
use crate::error::HeroResult;

/// Hero repository trait
#[trait_variant::make(HeroRepository: Send)]
pub trait LocalHeroRepository {
    /// All heroes, ascending by id
    async fn list(&self) -> HeroResult<Vec<Hero>>;

    async fn find_by_id(&self, id: HeroId) -> HeroResult<Option<Hero>>;

    /// Insert with a freshly assigned id and timestamps
    async fn create(&self, attrs: &HeroAttributes) -> HeroResult<Hero>;

    /// Replace the editable fields and refresh `updated_at`; `None` if absent
    async fn update(&self, id: HeroId, attrs: &HeroAttributes) -> HeroResult<Option<Hero>>;

    /// Returns whether a row was removed
    async fn delete(&self, id: HeroId) -> HeroResult<bool>;
}
