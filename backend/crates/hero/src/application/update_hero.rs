//! Update Hero Use Case
//!
//! Full replacement of the editable fields. Fields are validated before the
//! hero is looked up, so an invalid body on a missing id is a 400, not a 404.

use std::sync::Arc;

use kernel::id::HeroId;

use crate::domain::entity::Hero;
use crate::domain::repository::HeroRepository;
use crate::domain::value_object::HeroAttributes;
use crate::error::{HeroError, HeroResult};

/// Update hero input
pub struct UpdateHeroInput {
    pub id: HeroId,
    pub name: String,
    pub role: String,
    pub difficulty: String,
}

/// Update hero use case
pub struct UpdateHeroUseCase<R>
where
    R: HeroRepository,
{
    hero_repo: Arc<R>,
}

impl<R> UpdateHeroUseCase<R>
where
    R: HeroRepository,
{
    pub fn new(hero_repo: Arc<R>) -> Self {
        Self { hero_repo }
    }

    pub async fn execute(&self, input: UpdateHeroInput) -> HeroResult<Hero> {
        let attrs = HeroAttributes::new(input.name, input.role, input.difficulty)?;

        let hero = self
            .hero_repo
            .update(input.id, &attrs)
            .await?
            .ok_or(HeroError::NotFound)?;

        tracing::info!(hero_id = %hero.id, "Hero updated");
        Ok(hero)
    }
}
